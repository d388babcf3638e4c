use std::ops::{Add, Mul, Neg, Sub};

/// A point on or near the WGS-84 ellipsoid
///
/// Height is measured along the local ellipsoid normal, in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticCoordinate {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub height_km: f64,
}

impl GeodeticCoordinate {
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_km: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            height_km,
        }
    }

    pub fn to_ecef(&self) -> EcefVector {
        super::geodetic_to_ecef(self.latitude_deg, self.longitude_deg, self.height_km)
    }
}

/// Earth-centered, earth-fixed Cartesian vector in kilometers
///
/// +z points toward the north pole, +x pierces the equator at the prime meridian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EcefVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EcefVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &EcefVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &EcefVector) -> EcefVector {
        EcefVector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. A zero vector is returned unchanged.
    pub fn normalized(&self) -> EcefVector {
        let n = self.norm();
        if n > 0.0 { *self * (1.0 / n) } else { *self }
    }

    pub fn to_geodetic(&self) -> GeodeticCoordinate {
        super::ecef_to_geodetic(self)
    }
}

impl Add for EcefVector {
    type Output = EcefVector;

    fn add(self, rhs: EcefVector) -> EcefVector {
        EcefVector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for EcefVector {
    type Output = EcefVector;

    fn sub(self, rhs: EcefVector) -> EcefVector {
        EcefVector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for EcefVector {
    type Output = EcefVector;

    fn mul(self, rhs: f64) -> EcefVector {
        EcefVector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for EcefVector {
    type Output = EcefVector;

    fn neg(self) -> EcefVector {
        EcefVector::new(-self.x, -self.y, -self.z)
    }
}
