pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ar() -> &'static str {
        "AR"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn sg() -> &'static str {
        "SG"
    }

    pub fn us() -> &'static str {
        "US"
    }
}
