//! Categorical survey fields.
//!
//! The survey codes each category with a small integer; a few exports use
//! English labels instead.  Both spellings are accepted, case-insensitively,
//! with spaces, dashes, and underscores treated alike.

use std::fmt;

/// Lower-case and collapse separators so `"Big Truck"`, `"big-truck"`, and
/// `"BIG_TRUCK"` compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
        .collect()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    BigTruck,
    MediumTruck,
    SmallTruck,
    Car,
    Motorcycle,
}

impl VehicleClass {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match normalize(s).as_str() {
            "1" | "big_truck" => Self::BigTruck,
            "2" | "medium_truck" => Self::MediumTruck,
            "3" | "small_truck" => Self::SmallTruck,
            "4" | "car" | "regular_car" => Self::Car,
            "5" | "motorcycle" => Self::Motorcycle,
            _ => return None,
        })
    }

    /// Trucks are the vehicles the delivery bays are reserved for.
    pub fn is_truck(self) -> bool {
        matches!(self, Self::BigTruck | Self::MediumTruck | Self::SmallTruck)
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BigTruck => "big truck",
            Self::MediumTruck => "medium truck",
            Self::SmallTruck => "small truck",
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Purpose {
    GoodsDelivery,
    PassengerTransport,
}

impl Purpose {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match normalize(s).as_str() {
            "1" | "delivery" | "goods_delivery" => Self::GoodsDelivery,
            "2" | "transport" | "passenger_transport" => Self::PassengerTransport,
            _ => return None,
        })
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GoodsDelivery => "goods delivery",
            Self::PassengerTransport => "passenger transport",
        })
    }
}

/// How much the stop disturbed traffic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Disruption {
    /// Parked inside the designated zone.
    None,
    /// Under 5 minutes.
    Minor,
    /// Over 5 minutes.
    Significant,
    /// Over 15 minutes.
    Major,
}

impl Disruption {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match normalize(s).as_str() {
            "0" | "none" => Self::None,
            "1" | "minor" | "small" => Self::Minor,
            "2" | "significant" => Self::Significant,
            "3" | "major" | "big" => Self::Major,
            _ => return None,
        })
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Disruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Direction of the street lane, which also identifies the survey station.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StreetSide {
    /// SUR-NORTE, station C.
    SouthToNorth,
    /// NORTE-SUR, station D.
    NorthToSouth,
}

impl StreetSide {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match normalize(s).as_str() {
            "sur_norte" | "c" | "south_north" => Self::SouthToNorth,
            "norte_sur" | "d" | "north_south" => Self::NorthToSouth,
            _ => return None,
        })
    }

    pub fn station(self) -> char {
        match self {
            Self::SouthToNorth => 'C',
            Self::NorthToSouth => 'D',
        }
    }
}

impl fmt::Display for StreetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SouthToNorth => "SUR-NORTE",
            Self::NorthToSouth => "NORTE-SUR",
        })
    }
}
