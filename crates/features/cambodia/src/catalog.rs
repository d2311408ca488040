//! Reference tables for the Cambodia monitor.

use wmon_domain::alerts::AlertPriorityTaxonomy;
use wmon_domain::feed::{FeedDescriptor, FeedKind};
use wmon_domain::geo::{LocationKind, MapView, RegionBounds, StrategicLocation};
use wmon_domain::panels::PanelVisibility;
use wmon_domain::priority::Priority;
use wmon_domain::region::{BorderDescriptor, CountryGroups, EconomicCorridor, RegionCatalog};

/// Country-level view centred on Cambodia.
pub const MAP_VIEW: MapView =
    MapView { latitude: 12.5657, longitude: 104.991, zoom: 7.0, pitch: 0.0, bearing: 0.0 };

/// Cambodia plus its neighbours: southern China to the north, the Myanmar border to the west,
/// the Vietnamese coast to the east and southern Thailand/Malaysia to the south.
pub const REGION_BOUNDS: RegionBounds =
    RegionBounds { north: 23.0, south: 8.0, east: 110.0, west: 97.0 };

pub const MONITORED_COUNTRIES: &[&str] = &[
    "Cambodia",
    "Thailand",
    "Vietnam",
    "Laos",
    "Myanmar",
    "China",
    "Malaysia",
    "Singapore",
];

/// Direct mentions. Any one of these makes a text relevant on its own.
pub const KEYWORDS: &[&str] = &[
    // Places and institutions
    "Cambodia",
    "Cambodian",
    "Phnom Penh",
    "Siem Reap",
    "Sihanoukville",
    "Mekong",
    "Tonle Sap",
    "ASEAN",
    // Bilateral relations
    "Thailand Cambodia",
    "Vietnam Cambodia",
    "China Cambodia",
    "Thai-Cambodian",
    "Vietnam-Cambodia",
    "China-Cambodia",
    // Economic corridors
    "Southern Economic Corridor",
    "Greater Mekong Subregion",
    "Belt and Road Cambodia",
    "BRI Cambodia",
    // Borders
    "Preah Vihear",
    "Thai-Cambodia border",
    "Mekong River",
    // Industries
    "Cambodia garment",
    "Cambodia tourism",
    "Cambodia construction",
    "Angkor Wat",
    "Cambodia casino",
    "Sihanoukville port",
    // Politics
    "Hun Sen",
    "Hun Manet",
    "CPP Cambodia",
    "Cambodian election",
    // Infrastructure
    "Cambodia railway",
    "Cambodia port",
    "Cambodia airport",
    "Phnom Penh airport",
    "Cambodia highway",
];

/// Topical terms that, together with a monitored country, make a text relevant.
pub const CONTEXT_KEYWORDS: &[&str] = &[
    "trade",
    "investment",
    "border",
    "dispute",
    "agreement",
    "treaty",
    "military",
    "defense",
    "security",
    "cooperation",
    "partnership",
    "mekong",
    "asean",
    "infrastructure",
    "development",
    "aid",
    "tourism",
    "economy",
    "sanctions",
    "tariff",
    "export",
    "import",
];

pub const COUNTRY_GROUPS: CountryGroups = CountryGroups {
    neighbors: &["Thailand", "Vietnam", "Laos"],
    powers: &["China", "Japan", "South Korea", "India"],
    asean: &[
        "Thailand",
        "Vietnam",
        "Laos",
        "Myanmar",
        "Singapore",
        "Malaysia",
        "Indonesia",
        "Philippines",
        "Brunei",
    ],
    economic_partners: &[
        "China",
        "Japan",
        "South Korea",
        "Singapore",
        "Thailand",
        "Vietnam",
        "United States",
    ],
};

pub const FOCUSED_FEEDS: &[FeedDescriptor] = &[
    // Cambodia
    FeedDescriptor {
        url: "https://www.phnompenhpost.com/rss",
        name: "Phnom Penh Post",
        tier: 2,
        kind: FeedKind::News,
        region: "Cambodia",
    },
    FeedDescriptor {
        url: "https://www.khmertimeskh.com/feed/",
        name: "Khmer Times",
        tier: 2,
        kind: FeedKind::News,
        region: "Cambodia",
    },
    FeedDescriptor {
        url: "https://www.voacambodia.com/api/zr$oteuoi",
        name: "VOA Cambodia",
        tier: 1,
        kind: FeedKind::News,
        region: "Cambodia",
    },
    // Regional context
    FeedDescriptor {
        url: "https://thediplomat.com/feed/",
        name: "The Diplomat (Asia)",
        tier: 2,
        kind: FeedKind::Geopolitical,
        region: "Asia",
    },
    FeedDescriptor {
        url: "https://asia.nikkei.com/rss/feed/nar",
        name: "Nikkei Asia",
        tier: 2,
        kind: FeedKind::Economic,
        region: "Asia",
    },
    FeedDescriptor {
        url: "https://www.bangkokpost.com/rss/data/news.xml",
        name: "Bangkok Post",
        tier: 2,
        kind: FeedKind::News,
        region: "Thailand",
    },
    FeedDescriptor {
        url: "https://e.vnexpress.net/rss/news.rss",
        name: "VnExpress International",
        tier: 2,
        kind: FeedKind::News,
        region: "Vietnam",
    },
    // ASEAN
    FeedDescriptor {
        url: "https://asean.org/feed/",
        name: "ASEAN Official",
        tier: 1,
        kind: FeedKind::Official,
        region: "Southeast Asia",
    },
    FeedDescriptor {
        url: "https://theaseanpost.com/feed",
        name: "The ASEAN Post",
        tier: 2,
        kind: FeedKind::Regional,
        region: "Southeast Asia",
    },
];

pub const STRATEGIC_LOCATIONS: &[StrategicLocation] = &[
    StrategicLocation {
        name: "Phnom Penh",
        lat: 11.5564,
        lon: 104.9282,
        kind: LocationKind::Capital,
        priority: Priority::Critical,
    },
    StrategicLocation {
        name: "Sihanoukville Port",
        lat: 10.6279,
        lon: 103.5278,
        kind: LocationKind::Port,
        priority: Priority::Critical,
    },
    StrategicLocation {
        name: "Siem Reap (Angkor)",
        lat: 13.3671,
        lon: 103.8448,
        kind: LocationKind::Tourism,
        priority: Priority::High,
    },
    StrategicLocation {
        name: "Poipet Border Crossing",
        lat: 13.6549,
        lon: 102.5656,
        kind: LocationKind::Border,
        priority: Priority::High,
    },
    StrategicLocation {
        name: "Bavet Border Crossing",
        lat: 11.0833,
        lon: 106.0167,
        kind: LocationKind::Border,
        priority: Priority::High,
    },
    StrategicLocation {
        name: "Ream Naval Base",
        lat: 10.5167,
        lon: 103.6333,
        kind: LocationKind::Military,
        priority: Priority::Critical,
    },
    StrategicLocation {
        name: "Phnom Penh Airport",
        lat: 11.5466,
        lon: 104.8440,
        kind: LocationKind::Airport,
        priority: Priority::High,
    },
    StrategicLocation {
        name: "Siem Reap Airport",
        lat: 13.4107,
        lon: 103.8130,
        kind: LocationKind::Airport,
        priority: Priority::Medium,
    },
];

pub const BORDERS: &[BorderDescriptor] = &[
    BorderDescriptor {
        name: "Cambodia-Thailand Border",
        neighbor: "Thailand",
        length_km: 817,
        priority: Priority::Critical,
        hotspots: &["Preah Vihear Temple", "Poipet", "O Smach"],
    },
    BorderDescriptor {
        name: "Cambodia-Vietnam Border",
        neighbor: "Vietnam",
        length_km: 1158,
        priority: Priority::High,
        hotspots: &["Bavet", "Kaam Samnor", "Trapeang Phlong"],
    },
    BorderDescriptor {
        name: "Cambodia-Laos Border",
        neighbor: "Laos",
        length_km: 555,
        priority: Priority::Medium,
        hotspots: &["Stung Treng", "Preah Vihear"],
    },
];

pub const ECONOMIC_CORRIDORS: &[EconomicCorridor] = &[
    EconomicCorridor {
        name: "Southern Economic Corridor",
        countries: &["Thailand", "Cambodia", "Vietnam"],
        description: "Bangkok - Phnom Penh - Ho Chi Minh City - Vung Tau",
        priority: Priority::Critical,
    },
    EconomicCorridor {
        name: "Southern Coastal Corridor",
        countries: &["Thailand", "Cambodia"],
        description: "Dawei - Kanchanaburi - Phnom Penh - Ho Chi Minh City - Vung Tau",
        priority: Priority::High,
    },
];

pub const ALERT_PRIORITIES: AlertPriorityTaxonomy = AlertPriorityTaxonomy {
    critical: &[
        "border conflict",
        "political crisis",
        "natural disaster",
        "major infrastructure damage",
        "diplomatic incident",
    ],
    high: &[
        "trade policy change",
        "investment announcement",
        "tourism impact",
        "currency fluctuation",
        "regional security",
    ],
    medium: &[
        "economic indicator",
        "infrastructure project",
        "cultural event",
        "environmental issue",
    ],
};

pub const PANELS: PanelVisibility = PanelVisibility {
    enabled: &[
        "cambodia-news",
        "regional-news",
        "border-monitor",
        "economic-updates",
        "infrastructure",
        "map",
    ],
    disabled: &["global-conflicts", "nato-tracker", "middle-east"],
};

/// All tables above, grouped for the variant descriptor.
pub const REGION: RegionCatalog = RegionCatalog {
    bounds: REGION_BOUNDS,
    monitored_countries: MONITORED_COUNTRIES,
    country_groups: COUNTRY_GROUPS,
    keywords: KEYWORDS,
    context_keywords: CONTEXT_KEYWORDS,
    strategic_locations: STRATEGIC_LOCATIONS,
    borders: BORDERS,
    corridors: ECONOMIC_CORRIDORS,
    alert_priorities: ALERT_PRIORITIES,
};
