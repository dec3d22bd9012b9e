//! Typed facade over the BoardGameGeek XML API.
//!
//! # Design
//! Every operation does the same three things: build one URI, fetch it once
//! and deserialize the body. Envelope payloads are unwrapped before they are
//! returned, so callers always get the item collection itself. The client
//! keeps no state besides the endpoint template and its `Fetcher`. There is
//! no caching.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{BggError, Result};
use crate::fetch::{Fetcher, Sleeper, ThreadSleeper};
use crate::http::{Transport, UreqTransport};
use crate::options::{Command, FamilyType, Flag, HotItemType, ThingType};
use crate::query::QueryBuilder;
use crate::types::{CollectionItem, Envelope, Family, HotItem, SearchResult, Thing, User};

/// Synchronous client: one network round trip per operation.
#[derive(Debug, Clone)]
pub struct BggClient<T = UreqTransport, S = ThreadSleeper> {
    endpoint_template: String,
    fetcher: Fetcher<T, S>,
}

impl BggClient {
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.connect_timeout, config.max_body_bytes);
        Self::with_transport(config, transport, ThreadSleeper)
    }

    /// Client configured from defaults plus `BGG_*` environment overrides.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

impl Default for BggClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport, S: Sleeper> BggClient<T, S> {
    pub fn with_transport(config: ClientConfig, transport: T, sleeper: S) -> Self {
        Self {
            endpoint_template: config.endpoint_template,
            fetcher: Fetcher::new(transport, sleeper, config.auth_token, config.retry),
        }
    }

    pub fn query(&self, command: Command) -> QueryBuilder {
        QueryBuilder::new(&self.endpoint_template, command)
    }

    /// Fetch `url` and map the body onto `R`.
    pub fn fetch_and_map<R: DeserializeOwned>(&self, url: &str) -> Result<R> {
        let body = self.fetcher.fetch(url)?;
        parse_xml(&body).map_err(|err| match err {
            BggError::Mapping { target, source, .. } => BggError::Mapping {
                target,
                url: Some(url.to_string()),
                source,
            },
            other => other,
        })
    }

    /// Things of `kind` with the given id, first page of 25 for any paged
    /// sub-lists.
    pub fn things(
        &self,
        kind: ThingType,
        id: u32,
        include: &[Flag],
        exclude: &[Flag],
    ) -> Result<Vec<Thing>> {
        let url = self
            .query(Command::Thing)
            .id(id)
            .thing_types(&[kind])
            .include(include)
            .exclude(exclude)
            .page(1)
            .page_size(25)
            .build();
        self.fetch_items(&url)
    }

    /// A board game with statistics, versions and videos.
    pub fn board_game(&self, id: u32) -> Result<Vec<Thing>> {
        self.things(
            ThingType::Boardgame,
            id,
            &[Flag::Stats, Flag::Versions, Flag::Videos],
            &[],
        )
    }

    pub fn family_items(&self, id: u32, kind: FamilyType) -> Result<Vec<Family>> {
        let url = self.query(Command::Family).family_type(kind).id(id).build();
        self.fetch_items(&url)
    }

    /// Public profile including buddies, guilds, and hot/top lists.
    pub fn user(&self, username: &str) -> Result<User> {
        let url = self
            .query(Command::User)
            .username(username)
            .include(&[Flag::Buddies, Flag::Guilds, Flag::Hot, Flag::Top])
            .build();
        self.fetch_and_map(&url)
    }

    /// A user's collection. `ids` narrows it to a comma-separated id list.
    /// Expansions are filtered out unless `include_expansions` is set.
    pub fn collection(
        &self,
        username: &str,
        ids: Option<&str>,
        include: &[Flag],
        exclude: &[Flag],
        include_expansions: bool,
    ) -> Result<Vec<CollectionItem>> {
        let mut builder = self
            .query(Command::Collection)
            .username(username)
            .id_str(ids)
            .include(include)
            .exclude(exclude);
        if !include_expansions {
            builder = builder.exclude_subtype(ThingType::BoardgameExpansion);
        }
        self.fetch_items(&builder.build())
    }

    pub fn search(
        &self,
        query: &str,
        exact: bool,
        include_expansions: bool,
    ) -> Result<Vec<SearchResult>> {
        let types: &[ThingType] = if include_expansions {
            &[ThingType::Boardgame, ThingType::BoardgameExpansion]
        } else {
            &[ThingType::Boardgame]
        };
        let mut builder = self.query(Command::Search).query(query).thing_types(types);
        if exact {
            builder = builder.include(&[Flag::Exact]);
        }
        self.fetch_items(&builder.build())
    }

    /// Current hotness list; board games unless another kind is given.
    pub fn hot_items(&self, kind: Option<HotItemType>) -> Result<Vec<HotItem>> {
        let url = self
            .query(Command::Hot)
            .hot_type(kind.unwrap_or(HotItemType::Boardgame))
            .build();
        self.fetch_items(&url)
    }

    fn fetch_items<R: DeserializeOwned>(&self, url: &str) -> Result<Vec<R>> {
        self.fetch_and_map::<Envelope<R>>(url)
            .map(Envelope::into_items)
    }
}

/// Deserialize an XML body into `R`, ignoring fields `R` does not declare.
///
/// # Errors
///
/// `BggError::Mapping` naming `R` when the markup is malformed or a value
/// cannot be coerced into its field type.
pub fn parse_xml<R: DeserializeOwned>(body: &str) -> Result<R> {
    quick_xml::de::from_str(body).map_err(|source| {
        let target = short_type_name::<R>();
        debug!(%target, error = %source, "mapping failed");
        BggError::Mapping {
            target,
            url: None,
            source,
        }
    })
}

/// `bgg_core::types::Envelope<bgg_core::types::Thing>` → `Envelope<Thing>`.
fn short_type_name<R: ?Sized>() -> String {
    let full = std::any::type_name::<R>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else if c == ':' {
            chars.next_if_eq(&':');
            segment.clear();
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::RetryPolicy;
    use crate::test_support::{RecordingSleeper, ScriptedTransport};

    const TEMPLATE: &str = "https://bgg.test/xmlapi2/{command}";

    const HOT_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item id="224517" rank="1">
        <thumbnail value="https://cf.geekdo-images.com/a.jpg"/>
        <name value="Brass: Birmingham"/>
        <yearpublished value="2018"/>
    </item>
    <item id="174430" rank="2">
        <thumbnail value="https://cf.geekdo-images.com/b.jpg"/>
        <name value="Gloomhaven"/>
        <yearpublished value="2017"/>
    </item>
    <item id="13" rank="3">
        <name value="CATAN"/>
    </item>
</items>"#;

    fn client<'a>(
        transport: &'a ScriptedTransport,
        sleeper: &'a RecordingSleeper,
    ) -> BggClient<&'a ScriptedTransport, &'a RecordingSleeper> {
        let config = ClientConfig {
            endpoint_template: TEMPLATE.to_string(),
            retry: RetryPolicy::default(),
            ..ClientConfig::default()
        };
        BggClient::with_transport(config, transport, sleeper)
    }

    fn sent_url(transport: &ScriptedTransport) -> String {
        transport.requests()[0].url.clone()
    }

    #[test]
    fn short_type_name_strips_paths() {
        assert_eq!(short_type_name::<Envelope<HotItem>>(), "Envelope<HotItem>");
        assert_eq!(short_type_name::<User>(), "User");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
    }

    #[test]
    fn hot_items_unwraps_envelope_in_document_order() {
        let transport = ScriptedTransport::ok(HOT_XML);
        let sleeper = RecordingSleeper::default();
        let items = client(&transport, &sleeper).hot_items(None).unwrap();

        assert_eq!(items.len(), 3);
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![224517, 174430, 13]);
        assert_eq!(items[1].name.value, "Gloomhaven");
        assert_eq!(items[0].year_published.as_ref().map(|y| y.value), Some(2018));
        assert!(items[2].thumbnail.is_none());
        assert_eq!(sent_url(&transport), "https://bgg.test/xmlapi2/hot?type=boardgame");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let xml = r#"<items termsofuse="x" generation="7">
            <item id="1" rank="1" trend="up">
                <name value="Future Game" lang="en"/>
                <sparkline><point x="1" y="2"/></sparkline>
                <newfield>anything at all</newfield>
            </item>
        </items>"#;
        let items: Envelope<HotItem> = parse_xml(xml).unwrap();
        assert_eq!(items.items.len(), 1);
        assert_eq!(items.items[0].name.value, "Future Game");
    }

    #[test]
    fn type_mismatch_is_a_mapping_error() {
        let xml = r#"<items><item id="not-a-number" rank="1"><name value="x"/></item></items>"#;
        let transport = ScriptedTransport::ok(xml);
        let sleeper = RecordingSleeper::default();
        let err = client(&transport, &sleeper).hot_items(None).unwrap_err();

        match &err {
            BggError::Mapping { target, .. } => assert_eq!(target, "Envelope<HotItem>"),
            other => panic!("expected mapping error, got {other:?}"),
        }
        assert_eq!(err.status_code(), 0);
        assert_eq!(err.url(), Some("https://bgg.test/xmlapi2/hot?type=boardgame"));
    }

    #[test]
    fn mismatched_tags_are_a_mapping_error() {
        let err = parse_xml::<User>(r#"<user id="1" name="x"><buddies total="0"></user>"#)
            .unwrap_err();
        assert!(matches!(err, BggError::Mapping { ref target, .. } if target == "User"));
        assert!(err.url().is_none());
    }

    #[test]
    fn missing_required_field_is_a_mapping_error() {
        let err = parse_xml::<Envelope<SearchResult>>(r#"<items><item type="boardgame"/></items>"#)
            .unwrap_err();
        assert!(matches!(err, BggError::Mapping { .. }));
    }

    #[test]
    fn transport_errors_pass_through_unmapped() {
        let transport = ScriptedTransport::statuses([(404, "")]);
        let sleeper = RecordingSleeper::default();
        let err = client(&transport, &sleeper).user("nobody").unwrap_err();
        assert!(matches!(err, BggError::RequestFailed { status: 404, .. }));
    }

    #[test]
    fn board_game_query_shape() {
        let transport = ScriptedTransport::ok(r#"<items></items>"#);
        let sleeper = RecordingSleeper::default();
        let things = client(&transport, &sleeper).board_game(174430).unwrap();

        assert!(things.is_empty());
        assert_eq!(
            sent_url(&transport),
            "https://bgg.test/xmlapi2/thing?id=174430&type=boardgame&stats=1&versions=1&videos=1&page=1&pagesize=25"
        );
    }

    #[test]
    fn things_maps_statistics() {
        let xml = r#"<items>
            <item type="boardgame" id="13">
                <thumbnail>https://cf.geekdo-images.com/t.jpg</thumbnail>
                <name type="primary" sortindex="1" value="CATAN"/>
                <description>Trade, build, settle.</description>
                <yearpublished value="1995"/>
                <minplayers value="3"/>
                <maxplayers value="4"/>
                <poll name="suggested_numplayers" title="User Suggested Number of Players" totalvotes="10">
                    <results numplayers="3"><result value="Best" numvotes="5"/></results>
                </poll>
                <link type="boardgamecategory" id="1026" value="Negotiation"/>
                <link type="boardgamedesigner" id="11" value="Klaus Teuber"/>
                <statistics page="1">
                    <ratings>
                        <usersrated value="120000"/>
                        <average value="7.1"/>
                        <bayesaverage value="6.9"/>
                        <ranks>
                            <rank type="subtype" id="1" name="boardgame" friendlyname="Board Game Rank" value="500" bayesaverage="6.9"/>
                            <rank type="family" id="5497" name="strategygames" friendlyname="Strategy Game Rank" value="Not Ranked" bayesaverage="Not Ranked"/>
                        </ranks>
                        <averageweight value="2.3"/>
                    </ratings>
                </statistics>
            </item>
        </items>"#;
        let transport = ScriptedTransport::ok(xml);
        let sleeper = RecordingSleeper::default();
        let things = client(&transport, &sleeper)
            .things(ThingType::Boardgame, 13, &[Flag::Stats], &[Flag::Comments])
            .unwrap();

        let catan = &things[0];
        assert_eq!(catan.primary_name(), Some("CATAN"));
        assert_eq!(catan.min_players.as_ref().map(|v| v.value), Some(3));
        assert_eq!(catan.links.len(), 2);
        let ratings = catan.statistics.as_ref().and_then(|s| s.ratings.as_ref()).unwrap();
        assert_eq!(ratings.users_rated.as_ref().map(|v| v.value), Some(120000));
        assert_eq!(ratings.ranks.as_ref().map(|r| r.ranks.len()), Some(2));
        assert_eq!(ratings.ranks.as_ref().unwrap().ranks[1].value, "Not Ranked");
        assert!(sent_url(&transport).contains("&stats=1&comments=0&"));
    }

    #[test]
    fn user_is_returned_without_envelope() {
        let xml = r#"<user id="39" name="Aldie" termsofuse="x">
            <firstname value="Scott"/>
            <lastname value="Alden"/>
            <yearregistered value="2000"/>
            <buddies total="2" page="1">
                <buddy id="1" name="derk"/>
                <buddy id="2" name="tomvasel"/>
            </buddies>
            <guilds total="1" page="1"><guild id="901" name="BGG Staff"/></guilds>
            <top domain="boardgame">
                <item rank="1" type="thing" id="13" name="CATAN"/>
            </top>
        </user>"#;
        let transport = ScriptedTransport::ok(xml);
        let sleeper = RecordingSleeper::default();
        let user = client(&transport, &sleeper).user("Aldie").unwrap();

        assert_eq!(user.name, "Aldie");
        assert_eq!(user.first_name.map(|v| v.value).as_deref(), Some("Scott"));
        let buddies = user.buddies.unwrap();
        assert_eq!(buddies.total, 2);
        assert_eq!(buddies.buddies[1].name, "tomvasel");
        assert_eq!(user.top.map(|t| t.items.len()), Some(1));
        assert!(user.hot.is_none());
        assert_eq!(
            sent_url(&transport),
            "https://bgg.test/xmlapi2/user?username=Aldie&buddies=1&guilds=1&hot=1&top=1"
        );
    }

    #[test]
    fn collection_excludes_expansions_by_default() {
        let transport = ScriptedTransport::ok(r#"<items totalitems="0"></items>"#);
        let sleeper = RecordingSleeper::default();
        client(&transport, &sleeper)
            .collection("Aldie", None, &[Flag::Own], &[], false)
            .unwrap();
        assert_eq!(
            sent_url(&transport),
            "https://bgg.test/xmlapi2/collection?username=Aldie&own=1&excludesubtype=boardgameexpansion"
        );
    }

    #[test]
    fn collection_with_ids_and_expansions() {
        let transport = ScriptedTransport::ok(r#"<items totalitems="0"></items>"#);
        let sleeper = RecordingSleeper::default();
        client(&transport, &sleeper)
            .collection("Aldie", Some("13,822"), &[], &[Flag::Wishlist], true)
            .unwrap();
        assert_eq!(
            sent_url(&transport),
            "https://bgg.test/xmlapi2/collection?username=Aldie&id=13%2C822&wishlist=0"
        );
    }

    #[test]
    fn search_query_shapes() {
        let xml = r#"<items total="1"><item type="boardgame" id="9209"><name type="primary" value="Ticket to Ride"/><yearpublished value="2004"/></item></items>"#;
        let transport = ScriptedTransport::ok(xml);
        let sleeper = RecordingSleeper::default();
        let results = client(&transport, &sleeper)
            .search("Ticket to Ride", true, true)
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name.value, "Ticket to Ride");
        assert_eq!(
            sent_url(&transport),
            "https://bgg.test/xmlapi2/search?query=Ticket%20to%20Ride&type=boardgame%2Cboardgameexpansion&exact=1"
        );

        let transport = ScriptedTransport::ok(r#"<items total="0"></items>"#);
        client(&transport, &sleeper).search("Azul", false, false).unwrap();
        assert_eq!(
            sent_url(&transport),
            "https://bgg.test/xmlapi2/search?query=Azul&type=boardgame"
        );
    }

    #[test]
    fn family_items_query_shape() {
        let xml = r#"<items><item type="boardgamefamily" id="3"><name type="primary" sortindex="1" value="Catan"/><link type="boardgamefamily" id="13" value="CATAN" inbound="true"/></item></items>"#;
        let transport = ScriptedTransport::ok(xml);
        let sleeper = RecordingSleeper::default();
        let families = client(&transport, &sleeper)
            .family_items(3, FamilyType::BoardgameFamily)
            .unwrap();

        assert_eq!(families[0].links[0].inbound.as_deref(), Some("true"));
        assert_eq!(
            sent_url(&transport),
            "https://bgg.test/xmlapi2/family?type=boardgamefamily&id=3"
        );
    }

    #[test]
    fn rate_limited_operation_retries_once_per_attempt() {
        let transport = ScriptedTransport::statuses([(429, ""), (429, ""), (200, HOT_XML)]);
        let sleeper = RecordingSleeper::default();
        let items = client(&transport, &sleeper)
            .hot_items(Some(HotItemType::Boardgame))
            .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(sleeper.total(), std::time::Duration::from_secs(6));
    }
}
