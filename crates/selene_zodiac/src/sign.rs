//! Zodiac sign and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg tropical longitude. Given a longitude, we
//! identify which sign the point falls in and express the position as
//! degrees-minutes-seconds within that sign.

use crate::angles::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Longitude of the sign's starting boundary in degrees.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// The next sign in the cycle (Pisces wraps to Aries).
    pub const fn next(self) -> ZodiacSign {
        ALL_SIGNS[(self.index() as usize + 1) % 12]
    }

    /// The previous sign in the cycle (Aries wraps to Pisces).
    pub const fn prev(self) -> ZodiacSign {
        ALL_SIGNS[(self.index() as usize + 11) % 12]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full sign position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    /// The zodiac sign.
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms { degrees: total_degrees, minutes, seconds }
}

/// Determine the zodiac sign from an ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60),
/// etc. Normalization handles negative and overflowing input, so the
/// function is total.
pub fn sign_from_longitude(lon_deg: f64) -> SignPosition {
    let lon = normalize_360(lon_deg);
    let sign_idx = (lon / 30.0).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_idx = sign_idx.min(11);
    let degrees_in_sign = lon - (sign_idx as f64) * 30.0;
    let sign = ALL_SIGNS[sign_idx as usize];
    let dms = deg_to_dms(degrees_in_sign);

    SignPosition { sign, sign_index: sign_idx, dms, degrees_in_sign }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signs_count() {
        assert_eq!(ALL_SIGNS.len(), 12);
    }

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn sign_names_nonempty() {
        for s in ALL_SIGNS {
            assert!(!s.name().is_empty());
        }
    }

    #[test]
    fn next_cycles_through_all_signs() {
        let mut s = ZodiacSign::Aries;
        for expected in &ALL_SIGNS[1..] {
            s = s.next();
            assert_eq!(s, *expected);
        }
        assert_eq!(s.next(), ZodiacSign::Aries);
    }

    #[test]
    fn pisces_wraps_to_aries() {
        assert_eq!(ZodiacSign::Pisces.next(), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::Aries.prev(), ZodiacSign::Pisces);
    }

    #[test]
    fn prev_inverts_next() {
        for s in ALL_SIGNS {
            assert_eq!(s.next().prev(), s);
        }
    }

    #[test]
    fn start_deg_spacing() {
        for s in ALL_SIGNS {
            assert!((s.start_deg() - s.index() as f64 * 30.0).abs() < 1e-12);
        }
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn sign_boundary_0() {
        let info = sign_from_longitude(0.0);
        assert_eq!(info.sign, ZodiacSign::Aries);
        assert_eq!(info.sign_index, 0);
        assert!(info.degrees_in_sign.abs() < 1e-10);
    }

    #[test]
    fn sign_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let info = sign_from_longitude(lon);
            assert_eq!(info.sign_index, i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn sign_mid_sign() {
        let info = sign_from_longitude(45.5);
        assert_eq!(info.sign, ZodiacSign::Taurus);
        assert!((info.degrees_in_sign - 15.5).abs() < 1e-10);
    }

    #[test]
    fn sign_wrap_around() {
        // Same sign for L and L + 360k
        for k in [-2.0, -1.0, 1.0, 3.0] {
            let info = sign_from_longitude(123.4 + 360.0 * k);
            assert_eq!(info.sign, ZodiacSign::Leo);
            assert!((info.degrees_in_sign - 3.4).abs() < 1e-9);
        }
    }

    #[test]
    fn sign_negative() {
        let info = sign_from_longitude(-10.0);
        assert_eq!(info.sign, ZodiacSign::Pisces); // 350 deg
        assert!((info.degrees_in_sign - 20.0).abs() < 1e-10);
    }

    #[test]
    fn sign_dms_within_sign() {
        // 45.5 deg → Taurus, 15 deg 30' 0"
        let info = sign_from_longitude(45.5);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
        assert!(info.dms.seconds.abs() < 0.01);
    }

    #[test]
    fn late_pisces() {
        let info = sign_from_longitude(358.0);
        assert_eq!(info.sign, ZodiacSign::Pisces);
        assert_eq!(info.sign.next(), ZodiacSign::Aries);
        assert!((info.degrees_in_sign - 28.0).abs() < 1e-10);
    }
}
