//! Closed vocabularies accepted by the XML API.
//!
//! Each enum maps to the lowercase token the server expects on the wire.
//! `FromStr` is the inverse, so vocabularies can come from config or test
//! vectors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A token did not match any member of the named vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} token: {token}")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Wire token for this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(UnknownToken {
                        kind: $kind,
                        token: other.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Logical endpoint, substituted into the `{command}` slot of the
    /// endpoint template.
    Command as "command" {
        Thing => "thing",
        Family => "family",
        User => "user",
        Collection => "collection",
        Search => "search",
        Hot => "hot",
    }
}

vocabulary! {
    /// Kinds of "thing" the API catalogs.
    ThingType as "thing type" {
        Boardgame => "boardgame",
        BoardgameExpansion => "boardgameexpansion",
        BoardgameAccessory => "boardgameaccessory",
        Videogame => "videogame",
        RpgItem => "rpgitem",
        RpgIssue => "rpgissue",
    }
}

vocabulary! {
    FamilyType as "family type" {
        Rpg => "rpg",
        RpgPeriodical => "rpgperiodical",
        BoardgameFamily => "boardgamefamily",
    }
}

vocabulary! {
    /// Hotness list to fetch.
    HotItemType as "hot item type" {
        Boardgame => "boardgame",
        Rpg => "rpg",
        Videogame => "videogame",
        BoardgamePerson => "boardgameperson",
        RpgPerson => "rpgperson",
        BoardgameCompany => "boardgamecompany",
        RpgCompany => "rpgcompany",
        VideogameCompany => "videogamecompany",
    }
}

vocabulary! {
    /// Boolean request options. Included flags go out as `<flag>=1`,
    /// excluded ones as `<flag>=0`.
    Flag as "flag" {
        Versions => "versions",
        Videos => "videos",
        Stats => "stats",
        Historical => "historical",
        Marketplace => "marketplace",
        Comments => "comments",
        RatingComments => "ratingcomments",
        Buddies => "buddies",
        Guilds => "guilds",
        Hot => "hot",
        Top => "top",
        Exact => "exact",
        Brief => "brief",
        Own => "own",
        Rated => "rated",
        Played => "played",
        Comment => "comment",
        Trade => "trade",
        Want => "want",
        Wishlist => "wishlist",
        WantToPlay => "wanttoplay",
        WantToBuy => "wanttobuy",
        PrevOwned => "prevowned",
        HasParts => "hasparts",
        WantParts => "wantparts",
        Preordered => "preordered",
    }
}
