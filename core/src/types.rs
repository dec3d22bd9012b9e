//! Payload shapes returned by the XML API.
//!
//! # Design
//! Field names follow quick-xml's serde conventions: `@name` for attributes,
//! `$text` for element text, and a `Vec` with `default` for repeated
//! children. Nothing here denies unknown fields. The server adds elements
//! and attributes over time, and those must not break existing callers.
//! Only fields worth typing are modelled; everything else is skipped.

use serde::Deserialize;

/// Wrapper element whose only content is a run of `<item>` children.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(rename = "item", default)]
    pub items: Vec<T>,
}

impl<T> Envelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Element whose payload lives in a `value` attribute, e.g.
/// `<yearpublished value="2017"/>`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Value<T> {
    #[serde(rename = "@value")]
    pub value: T,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Name {
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@sortindex")]
    pub sort_index: Option<u32>,
    #[serde(rename = "@value")]
    pub value: String,
}

/// Cross-reference to a related entity (category, designer, family...).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Link {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(rename = "@inbound")]
    pub inbound: Option<String>,
}

/// A catalog entry from the `thing` command.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Thing {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: u32,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "name", default)]
    pub names: Vec<Name>,
    pub description: Option<String>,
    #[serde(rename = "yearpublished")]
    pub year_published: Option<Value<i32>>,
    #[serde(rename = "minplayers")]
    pub min_players: Option<Value<u32>>,
    #[serde(rename = "maxplayers")]
    pub max_players: Option<Value<u32>>,
    #[serde(rename = "playingtime")]
    pub playing_time: Option<Value<u32>>,
    #[serde(rename = "minplaytime")]
    pub min_play_time: Option<Value<u32>>,
    #[serde(rename = "maxplaytime")]
    pub max_play_time: Option<Value<u32>>,
    #[serde(rename = "minage")]
    pub min_age: Option<Value<u32>>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub statistics: Option<Statistics>,
}

impl Thing {
    /// The `primary` name, falling back to the first one listed.
    pub fn primary_name(&self) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.kind == "primary")
            .or_else(|| self.names.first())
            .map(|n| n.value.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Statistics {
    #[serde(rename = "@page")]
    pub page: Option<u32>,
    pub ratings: Option<Ratings>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Ratings {
    #[serde(rename = "usersrated")]
    pub users_rated: Option<Value<u32>>,
    pub average: Option<Value<f64>>,
    #[serde(rename = "bayesaverage")]
    pub bayes_average: Option<Value<f64>>,
    pub owned: Option<Value<u32>>,
    #[serde(rename = "averageweight")]
    pub average_weight: Option<Value<f64>>,
    pub ranks: Option<Ranks>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Ranks {
    #[serde(rename = "rank", default)]
    pub ranks: Vec<Rank>,
}

/// `value` is a number or the literal `Not Ranked`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Rank {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@friendlyname")]
    pub friendly_name: Option<String>,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Family {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: u32,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "name", default)]
    pub names: Vec<Name>,
    pub description: Option<String>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
}

/// Profile from the `user` command. Not wrapped in an envelope.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "firstname")]
    pub first_name: Option<Value<String>>,
    #[serde(rename = "lastname")]
    pub last_name: Option<Value<String>>,
    #[serde(rename = "avatarlink")]
    pub avatar_link: Option<Value<String>>,
    #[serde(rename = "yearregistered")]
    pub year_registered: Option<Value<String>>,
    #[serde(rename = "lastlogin")]
    pub last_login: Option<Value<String>>,
    #[serde(rename = "stateorprovince")]
    pub state_or_province: Option<Value<String>>,
    pub country: Option<Value<String>>,
    pub buddies: Option<Buddies>,
    pub guilds: Option<Guilds>,
    pub top: Option<RankedList>,
    pub hot: Option<RankedList>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Buddies {
    #[serde(rename = "@total")]
    pub total: u32,
    #[serde(rename = "@page")]
    pub page: Option<u32>,
    #[serde(rename = "buddy", default)]
    pub buddies: Vec<Member>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Guilds {
    #[serde(rename = "@total")]
    pub total: u32,
    #[serde(rename = "@page")]
    pub page: Option<u32>,
    #[serde(rename = "guild", default)]
    pub guilds: Vec<Member>,
}

/// A buddy or guild entry: just an id and a name.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Member {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
}

/// A user's `top` or `hot` list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RankedList {
    #[serde(rename = "@domain")]
    pub domain: Option<String>,
    #[serde(rename = "item", default)]
    pub items: Vec<RankedItem>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RankedItem {
    #[serde(rename = "@rank")]
    pub rank: u32,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CollectionItem {
    #[serde(rename = "@objecttype")]
    pub object_type: String,
    #[serde(rename = "@objectid")]
    pub object_id: u32,
    #[serde(rename = "@subtype")]
    pub subtype: String,
    #[serde(rename = "@collid")]
    pub coll_id: Option<u32>,
    pub name: CollectionName,
    #[serde(rename = "yearpublished")]
    pub year_published: Option<i32>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub status: Option<CollectionStatus>,
    #[serde(rename = "numplays")]
    pub num_plays: Option<u32>,
}

/// Collection names carry the title as text: `<name sortindex="1">Title</name>`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CollectionName {
    #[serde(rename = "@sortindex")]
    pub sort_index: Option<u32>,
    #[serde(rename = "$text")]
    pub value: String,
}

/// Ownership flags, each `0` or `1`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionStatus {
    #[serde(rename = "@own")]
    pub own: u8,
    #[serde(rename = "@prevowned")]
    pub prev_owned: u8,
    #[serde(rename = "@fortrade")]
    pub for_trade: u8,
    #[serde(rename = "@want")]
    pub want: u8,
    #[serde(rename = "@wanttoplay")]
    pub want_to_play: u8,
    #[serde(rename = "@wanttobuy")]
    pub want_to_buy: u8,
    #[serde(rename = "@wishlist")]
    pub wishlist: u8,
    #[serde(rename = "@preordered")]
    pub preordered: u8,
    #[serde(rename = "@lastmodified")]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: u32,
    pub name: Name,
    #[serde(rename = "yearpublished")]
    pub year_published: Option<Value<i32>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HotItem {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@rank")]
    pub rank: u32,
    pub thumbnail: Option<Value<String>>,
    pub name: Value<String>,
    #[serde(rename = "yearpublished")]
    pub year_published: Option<Value<i32>>,
}
