//! Regional routing values and platform shards for upstream endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Regional routing value used by account and match endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Americas routing.
    Americas,
    /// Asia routing.
    Asia,
    /// Europe routing.
    Europe,
    /// Southeast Asia routing.
    Sea,
}

impl Platform {
    /// URL segment for this routing value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform shard used by summoner, ranked, and spectator endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Brazil.
    Br1,
    /// Europe Nordic & East.
    Eun1,
    /// Europe West.
    Euw1,
    /// Japan.
    Jp1,
    /// Korea.
    Kr,
    /// Latin America North.
    La1,
    /// Latin America South.
    La2,
    /// North America.
    Na1,
    /// Oceania.
    Oc1,
    /// Philippines.
    Ph2,
    /// Russia.
    Ru,
    /// Singapore.
    Sg2,
    /// Thailand.
    Th2,
    /// Turkey.
    Tr1,
    /// Taiwan.
    Tw2,
    /// Vietnam.
    Vn2,
}

impl Region {
    /// URL segment for this shard.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Br1 => "br1",
            Self::Eun1 => "eun1",
            Self::Euw1 => "euw1",
            Self::Jp1 => "jp1",
            Self::Kr => "kr",
            Self::La1 => "la1",
            Self::La2 => "la2",
            Self::Na1 => "na1",
            Self::Oc1 => "oc1",
            Self::Ph2 => "ph2",
            Self::Ru => "ru",
            Self::Sg2 => "sg2",
            Self::Th2 => "th2",
            Self::Tr1 => "tr1",
            Self::Tw2 => "tw2",
            Self::Vn2 => "vn2",
        }
    }

    /// Regional routing value that serves this shard.
    #[must_use]
    pub const fn platform(self) -> Platform {
        match self {
            Self::Br1 | Self::La1 | Self::La2 | Self::Na1 => Platform::Americas,
            Self::Eun1 | Self::Euw1 | Self::Ru | Self::Tr1 => Platform::Europe,
            Self::Jp1 | Self::Kr => Platform::Asia,
            Self::Oc1 | Self::Ph2 | Self::Sg2 | Self::Th2 | Self::Tw2 | Self::Vn2 => Platform::Sea,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "br1" => Ok(Self::Br1),
            "eun1" => Ok(Self::Eun1),
            "euw1" => Ok(Self::Euw1),
            "jp1" => Ok(Self::Jp1),
            "kr" => Ok(Self::Kr),
            "la1" => Ok(Self::La1),
            "la2" => Ok(Self::La2),
            "na1" => Ok(Self::Na1),
            "oc1" => Ok(Self::Oc1),
            "ph2" => Ok(Self::Ph2),
            "ru" => Ok(Self::Ru),
            "sg2" => Ok(Self::Sg2),
            "th2" => Ok(Self::Th2),
            "tr1" => Ok(Self::Tr1),
            "tw2" => Ok(Self::Tw2),
            "vn2" => Ok(Self::Vn2),
            other => Err(format!("unknown region `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shard_maps_to_routing_value() {
        assert_eq!(Region::Euw1.platform(), Platform::Europe);
        assert_eq!(Region::Na1.platform(), Platform::Americas);
        assert_eq!(Region::Kr.platform(), Platform::Asia);
        assert_eq!(Region::Oc1.platform(), Platform::Sea);
    }

    #[test]
    fn parses_url_segments() {
        assert_eq!("euw1".parse::<Region>().unwrap(), Region::Euw1);
        assert_eq!(Region::Tr1.to_string(), "tr1");
        assert!("euw9".parse::<Region>().is_err());
    }
}
