//! Sample patterns
//!
//! Offsets are relative to the pixel center and stay within half a pixel.

use crate::{Error, Result};

/// Blue noise pattern used for each pixel
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum SamplePattern {
    Blue1,
    Blue8,
    Blue16,
    Blue32,
    Blue64,
}

impl Default for SamplePattern {
    fn default() -> SamplePattern {
        SamplePattern::Blue1
    }
}

impl SamplePattern {
    /// Pattern with `n` samples per pixel
    pub fn with_samples(n: usize) -> Result<Self> {
        match n {
            1 => Ok(SamplePattern::Blue1),
            8 => Ok(SamplePattern::Blue8),
            16 => Ok(SamplePattern::Blue16),
            32 => Ok(SamplePattern::Blue32),
            64 => Ok(SamplePattern::Blue64),
            _ => Err(Error::Config { token: format!("-pattern:{}", n),
                                     reason: String::from("pattern size must be 1, 8, 16, 32 or 64") }),
        }
    }
    pub fn offsets(&self) -> &'static [(f64, f64)] {
        match self {
            SamplePattern::Blue1 => &BLUE_1,
            SamplePattern::Blue8 => &BLUE_8,
            SamplePattern::Blue16 => &BLUE_16,
            SamplePattern::Blue32 => &BLUE_32,
            SamplePattern::Blue64 => &BLUE_64,
        }
    }
    pub fn len(&self) -> usize {
        self.offsets().len()
    }
    pub fn is_empty(&self) -> bool {
        self.offsets().is_empty()
    }
}

pub const BLUE_1 : [(f64, f64); 1] = [
    (0.0, 0.0),
];

pub const BLUE_8 : [(f64, f64); 8] = [
    (-0.266471, 0.164718),
    (0.353688, 0.0396624),
    (-0.401679, -0.215021),
    (0.488846, 0.429684),
    (0.122459, 0.282964),
    (-0.0344567, -0.0841444),
    (-0.139007, -0.475235),
    (0.207413, -0.328058),
];

pub const BLUE_16 : [(f64, f64); 16] = [
    (-0.15588, 0.470117),
    (0.309757, 0.361907),
    (-0.262354, -0.0815612),
    (-0.0681658, -0.259945),
    (0.322758, -0.283528),
    (-0.320806, -0.322773),
    (0.0512257, 0.322814),
    (-0.202352, 0.180198),
    (0.47831, -0.461752),
    (0.148476, -0.110966),
    (0.257911, 0.123122),
    (-0.010612, 0.0568067),
    (-0.388471, 0.34462),
    (0.125996, -0.425848),
    (-0.476457, 0.11612),
    (0.455289, -0.107372),
];

pub const BLUE_32 : [(f64, f64); 32] = [
    (0.189364, -0.34008),
    (0.317582, 0.40063),
    (0.00903428, -0.37434),
    (-0.211247, -0.0874182),
    (-0.36328, -0.436876),
    (0.332911, -0.0405282),
    (-0.499704, -0.098696),
    (-0.43663, 0.125115),
    (-0.268375, 0.404225),
    (0.377287, 0.110864),
    (-0.189753, -0.434115),
    (-0.482506, -0.308426),
    (-0.131792, -0.265741),
    (0.492355, 0.475001),
    (0.427114, 0.266354),
    (0.370901, -0.245547),
    (-0.318628, -0.24432),
    (0.0287945, 0.273144),
    (0.0469984, -0.193582),
    (-0.161547, 0.279104),
    (0.187457, 0.131905),
    (-0.357581, -0.0330108),
    (0.19744, 0.296687),
    (0.214549, -0.153571),
    (-0.066506, -0.0544354),
    (0.128115, 0.477316),
    (0.336461, -0.4314),
    (0.0992119, 0.00607759),
    (-0.0530518, 0.445445),
    (-0.39892, 0.307062),
    (-0.0609558, 0.122077),
    (-0.254358, 0.132232),
];

pub const BLUE_64 : [(f64, f64); 64] = [
    (0.169145, 0.0386533),
    (-0.185995, 0.12891),
    (-0.33949, -0.0792913),
    (0.46276, 0.260894),
    (-0.145552, -0.236573),
    (0.0238256, -0.405569),
    (-0.123886, -0.370305),
    (-0.362971, 0.17069),
    (-0.155215, 0.421057),
    (0.120824, -0.307987),
    (0.473818, -0.182621),
    (0.0588257, 0.289902),
    (0.425935, 0.0498855),
    (0.181654, -0.400465),
    (-0.235701, -0.45028),
    (-0.0634356, -0.0537876),
    (-0.30054, 0.448895),
    (-0.475611, -0.0674412),
    (0.275915, -0.3061),
    (0.308783, 0.317938),
    (-0.431976, 0.0432268),
    (-0.461469, -0.311944),
    (0.220823, 0.489836),
    (0.366768, 0.178631),
    (-0.0776108, 0.0687405),
    (0.438831, 0.360455),
    (-0.0121063, 0.170835),
    (-0.242543, -0.318533),
    (-0.350232, -0.347088),
    (0.0819125, 0.490154),
    (0.347007, -0.180837),
    (0.245162, -0.0707628),
    (-0.394427, -0.463977),
    (-0.402447, 0.296233),
    (-0.206571, -0.00285104),
    (-0.0645798, 0.315793),
    (0.244744, 0.172488),
    (0.328788, 0.443042),
    (-0.0209748, -0.288666),
    (0.407151, -0.303403),
    (-0.0869206, -0.479188),
    (-0.401502, -0.199011),
    (0.0444317, 0.0248501),
    (0.0926074, -0.199535),
    (-0.254756, 0.34622),
    (-0.26848, 0.233584),
    (-0.00398004, 0.416032),
    (-0.034522, -0.162716),
    (0.382756, -0.0643074),
    (0.297665, 0.0525296),
    (0.159611, 0.38493),
    (-0.1409, 0.24279),
    (-0.2815, -0.197729),
    (0.459149, 0.476106),
    (-0.306856, 0.0562217),
    (-0.187394, -0.115032),
    (0.21961, -0.19201),
    (0.110793, 0.155619),
    (-0.489742, 0.155228),
    (0.187301, 0.276399),
    (0.102022, -0.0854797),
    (0.331543, -0.425117),
    (0.472466, -0.416333),
    (-0.424907, 0.409491),
];
