//! Canned `/xmlapi2` payloads, one per command.
//!
//! Trimmed from real responses. The extra elements and attributes that the
//! client does not model are kept on purpose.

pub const THING: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgame" id="174430">
        <thumbnail>https://cf.geekdo-images.com/gloomhaven_t.jpg</thumbnail>
        <image>https://cf.geekdo-images.com/gloomhaven.jpg</image>
        <name type="primary" sortindex="1" value="Gloomhaven"/>
        <name type="alternate" sortindex="1" value="幽港迷城"/>
        <description>Gloomhaven is a game of Euro-inspired tactical combat.</description>
        <yearpublished value="2017"/>
        <minplayers value="1"/>
        <maxplayers value="4"/>
        <poll name="suggested_numplayers" title="User Suggested Number of Players" totalvotes="1200">
            <results numplayers="1"><result value="Best" numvotes="200"/></results>
        </poll>
        <playingtime value="120"/>
        <minplaytime value="60"/>
        <maxplaytime value="120"/>
        <minage value="14"/>
        <link type="boardgamecategory" id="1022" value="Adventure"/>
        <link type="boardgamedesigner" id="69802" value="Isaac Childres"/>
        <versions>
            <item type="boardgameversion" id="312113"><name type="primary" sortindex="1" value="English first edition"/></item>
        </versions>
        <statistics page="1">
            <ratings>
                <usersrated value="61000"/>
                <average value="8.58"/>
                <bayesaverage value="8.38"/>
                <stddev value="1.62"/>
                <ranks>
                    <rank type="subtype" id="1" name="boardgame" friendlyname="Board Game Rank" value="3" bayesaverage="8.38"/>
                </ranks>
                <owned value="95000"/>
                <averageweight value="3.91"/>
            </ratings>
        </statistics>
    </item>
</items>"#;

pub const FAMILY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgamefamily" id="3">
        <thumbnail>https://cf.geekdo-images.com/catan_t.jpg</thumbnail>
        <name type="primary" sortindex="1" value="Game: Catan"/>
        <description>Games in the Catan family.</description>
        <link type="boardgamefamily" id="13" value="CATAN" inbound="true"/>
        <link type="boardgamefamily" id="926" value="CATAN: Cities &amp; Knights" inbound="true"/>
    </item>
</items>"#;

pub const USER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<user id="39" name="Aldie" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <firstname value="Scott"/>
    <lastname value="Alden"/>
    <avatarlink value="N/A"/>
    <yearregistered value="2000"/>
    <lastlogin value="2024-05-01"/>
    <stateorprovince value="Texas"/>
    <country value="United States"/>
    <webaddress value=""/>
    <tradingrating value="0"/>
    <buddies total="2" page="1">
        <buddy id="1" name="derk"/>
        <buddy id="2" name="tomvasel"/>
    </buddies>
    <guilds total="1" page="1">
        <guild id="901" name="BGG Staff"/>
    </guilds>
    <top domain="boardgame">
        <item rank="1" type="thing" id="13" name="CATAN"/>
        <item rank="2" type="thing" id="822" name="Carcassonne"/>
    </top>
    <hot domain="boardgame">
        <item rank="1" type="thing" id="174430" name="Gloomhaven"/>
    </hot>
</user>"#;

pub const COLLECTION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items totalitems="2" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse" pubdate="Wed, 01 May 2024 10:00:00 +0000">
    <item objecttype="thing" objectid="13" subtype="boardgame" collid="1001">
        <name sortindex="1">CATAN</name>
        <yearpublished>1995</yearpublished>
        <image>https://cf.geekdo-images.com/catan.jpg</image>
        <thumbnail>https://cf.geekdo-images.com/catan_t.jpg</thumbnail>
        <status own="1" prevowned="0" fortrade="0" want="0" wanttoplay="0" wanttobuy="0" wishlist="0" preordered="0" lastmodified="2024-01-01 10:00:00"/>
        <numplays>12</numplays>
    </item>
    <item objecttype="thing" objectid="822" subtype="boardgame" collid="1002">
        <name sortindex="1">Carcassonne</name>
        <yearpublished>2000</yearpublished>
        <status own="0" prevowned="1" fortrade="1" want="0" wanttoplay="0" wanttobuy="0" wishlist="0" preordered="0" lastmodified="2023-06-11 08:30:00"/>
        <numplays>3</numplays>
    </item>
</items>"#;

pub const SEARCH: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items total="2" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgame" id="9209">
        <name type="primary" value="Ticket to Ride"/>
        <yearpublished value="2004"/>
    </item>
    <item type="boardgame" id="14996">
        <name type="primary" value="Ticket to Ride: Europe"/>
        <yearpublished value="2005"/>
    </item>
</items>"#;

pub const HOT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item id="224517" rank="1">
        <thumbnail value="https://cf.geekdo-images.com/brass_t.jpg"/>
        <name value="Brass: Birmingham"/>
        <yearpublished value="2018"/>
    </item>
    <item id="174430" rank="2">
        <thumbnail value="https://cf.geekdo-images.com/gloomhaven_t.jpg"/>
        <name value="Gloomhaven"/>
        <yearpublished value="2017"/>
    </item>
    <item id="13" rank="3">
        <thumbnail value="https://cf.geekdo-images.com/catan_t.jpg"/>
        <name value="CATAN"/>
        <yearpublished value="1995"/>
    </item>
</items>"#;

/// Payload served for `command`, if the command exists.
pub fn for_command(command: &str) -> Option<&'static str> {
    match command {
        "thing" => Some(THING),
        "family" => Some(FAMILY),
        "user" => Some(USER),
        "collection" => Some(COLLECTION),
        "search" => Some(SEARCH),
        "hot" => Some(HOT),
        _ => None,
    }
}
