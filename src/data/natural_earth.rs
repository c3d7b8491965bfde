//! Natural Earth GeoJSON import.
//!
//! Reads admin-0 countries, admin-1 states/provinces, and populated places, and
//! applies the game's import rules: sliver rings are dropped, non-sovereign
//! territories are skipped, display names are normalised, and features that share a
//! code are merged into one multi-ring region.

use crate::data::model::{City, Difficulty, PolygonRegion};
use crate::data::region::GameRegion;
use crate::error::CatalogError;
use crate::geo::GeoPoint;
use geojson::{Feature, FeatureCollection, GeoJson, Value};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Rings with fewer points than this (closing point included) are slivers.
pub const MIN_POLYGON_POINTS: usize = 4;

/// Territories that are not playable countries.
const SKIP_NAMES: &[&str] = &[
    "Ashmore and Cartier Is.",
    "Indian Ocean Ter.",
    "Bajo Nuevo Bank",
    "Clipperton I.",
    "Coral Sea Is.",
    "Cyprus U.N. Buffer Zone",
    "Dhekelia",
    "Akrotiri",
    "Scarborough Reef",
    "Serranilla Bank",
    "Spratly Is.",
    "USNB Guantanamo Bay",
    "Siachen Glacier",
];

/// Natural Earth name -> (display name, code). `None` skips the feature.
const NAME_OVERRIDES: &[(&str, Option<(&str, &str)>)] = &[
    ("Dem. Rep. Congo", Some(("Congo (DR)", "CD"))),
    ("Congo", Some(("Congo (Republic)", "CG"))),
    ("Dominican Rep.", Some(("Dominican Rep.", "DO"))),
    ("Côte d'Ivoire", Some(("Cote d'Ivoire", "CI"))),
    ("eSwatini", Some(("Eswatini", "SZ"))),
    ("Cabo Verde", Some(("Cabo Verde", "CV"))),
    ("W. Sahara", Some(("Western Sahara", "EH"))),
    ("N. Cyprus", Some(("Northern Cyprus", "XC"))),
    ("Bosnia and Herz.", Some(("Bosnia and Herzegovina", "BA"))),
    ("Central African Rep.", Some(("Central African Republic", "CF"))),
    ("Czech Rep.", Some(("Czech Republic", "CZ"))),
    ("Czechia", Some(("Czech Republic", "CZ"))),
    ("Eq. Guinea", Some(("Equatorial Guinea", "GQ"))),
    ("S. Sudan", Some(("South Sudan", "SS"))),
    ("Solomon Is.", Some(("Solomon Islands", "SB"))),
    ("Marshall Is.", Some(("Marshall Islands", "MH"))),
    ("Falkland Is.", Some(("Falkland Islands", "FK"))),
    ("St. Vin. and Gren.", Some(("Saint Vincent and the Grenadines", "VC"))),
    ("St. Kitts and Nevis", Some(("Saint Kitts and Nevis", "KN"))),
    ("St. Lucia", Some(("Saint Lucia", "LC"))),
    ("São Tomé and Príncipe", Some(("Sao Tome and Principe", "ST"))),
    ("Sao Tome and Principe", Some(("Sao Tome and Principe", "ST"))),
    ("Timor-Leste", Some(("Timor-Leste", "TL"))),
    ("N. Korea", Some(("North Korea", "KP"))),
    ("S. Korea", Some(("South Korea", "KR"))),
    ("Lao PDR", Some(("Laos", "LA"))),
    ("United States of America", Some(("United States", "US"))),
    ("United Kingdom", Some(("United Kingdom", "GB"))),
    ("Macedonia", Some(("North Macedonia", "MK"))),
    ("North Macedonia", Some(("North Macedonia", "MK"))),
    ("Fr. S. Antarctic Lands", None),
    ("S. Geo. and the Is.", None),
    ("Br. Indian Ocean Ter.", None),
    ("Heard I. and McDonald Is.", None),
    ("Fr. Polynesia", None),
    ("N. Mariana Is.", None),
    ("Cayman Is.", None),
    ("U.S. Virgin Is.", None),
    ("Turks and Caicos Is.", None),
    ("St-Martin", None),
    ("Sint Maarten", None),
    ("St-Barthélemy", None),
];

/// Codes for features Natural Earth leaves without (or with a wrong) ISO code.
const CODE_FIXES: &[(&str, &str)] = &[
    ("Taiwan", "TW"),
    ("Norway", "NO"),
    ("France", "FR"),
    ("Somaliland", "XS"),
    ("Kosovo", "XK"),
    ("N. Cyprus", "XC"),
];

/// US admin-1 entries that are not states.
const US_EXCLUDED: &[&str] = &["AS", "GU", "MP", "PR", "VI", "UM", "DC"];

#[rustfmt::skip]
const CAPITALS: &[(&str, &str)] = &[
    ("AD", "Andorra la Vella"), ("AE", "Abu Dhabi"), ("AF", "Kabul"), ("AG", "St. John's"),
    ("AL", "Tirana"), ("AM", "Yerevan"), ("AO", "Luanda"), ("AR", "Buenos Aires"),
    ("AT", "Vienna"), ("AU", "Canberra"), ("AZ", "Baku"), ("BA", "Sarajevo"),
    ("BB", "Bridgetown"), ("BD", "Dhaka"), ("BE", "Brussels"), ("BF", "Ouagadougou"),
    ("BG", "Sofia"), ("BH", "Manama"), ("BI", "Gitega"), ("BJ", "Porto-Novo"),
    ("BN", "Bandar Seri Begawan"), ("BO", "Sucre"), ("BR", "Brasilia"), ("BS", "Nassau"),
    ("BT", "Thimphu"), ("BW", "Gaborone"), ("BY", "Minsk"), ("BZ", "Belmopan"),
    ("CA", "Ottawa"), ("CD", "Kinshasa"), ("CF", "Bangui"), ("CG", "Brazzaville"),
    ("CH", "Bern"), ("CI", "Yamoussoukro"), ("CL", "Santiago"), ("CM", "Yaounde"),
    ("CN", "Beijing"), ("CO", "Bogota"), ("CR", "San Jose"), ("CU", "Havana"),
    ("CV", "Praia"), ("CY", "Nicosia"), ("CZ", "Prague"), ("DE", "Berlin"),
    ("DJ", "Djibouti"), ("DK", "Copenhagen"), ("DM", "Roseau"), ("DO", "Santo Domingo"),
    ("DZ", "Algiers"), ("EC", "Quito"), ("EE", "Tallinn"), ("EG", "Cairo"),
    ("EH", "Laayoune"), ("ER", "Asmara"), ("ES", "Madrid"), ("ET", "Addis Ababa"),
    ("FI", "Helsinki"), ("FJ", "Suva"), ("FK", "Stanley"), ("FM", "Palikir"),
    ("FR", "Paris"), ("GA", "Libreville"), ("GB", "London"), ("GD", "St. George's"),
    ("GE", "Tbilisi"), ("GH", "Accra"), ("GL", "Nuuk"), ("GM", "Banjul"),
    ("GN", "Conakry"), ("GQ", "Malabo"), ("GR", "Athens"), ("GT", "Guatemala City"),
    ("GW", "Bissau"), ("GY", "Georgetown"), ("HN", "Tegucigalpa"), ("HR", "Zagreb"),
    ("HT", "Port-au-Prince"), ("HU", "Budapest"), ("ID", "Jakarta"), ("IE", "Dublin"),
    ("IL", "Jerusalem"), ("IN", "New Delhi"), ("IQ", "Baghdad"), ("IR", "Tehran"),
    ("IS", "Reykjavik"), ("IT", "Rome"), ("JM", "Kingston"), ("JO", "Amman"),
    ("JP", "Tokyo"), ("KE", "Nairobi"), ("KG", "Bishkek"), ("KH", "Phnom Penh"),
    ("KI", "Tarawa"), ("KM", "Moroni"), ("KN", "Basseterre"), ("KP", "Pyongyang"),
    ("KR", "Seoul"), ("KW", "Kuwait City"), ("KZ", "Astana"), ("LA", "Vientiane"),
    ("LB", "Beirut"), ("LC", "Castries"), ("LI", "Vaduz"), ("LK", "Sri Jayawardenepura Kotte"),
    ("LR", "Monrovia"), ("LS", "Maseru"), ("LT", "Vilnius"), ("LU", "Luxembourg"),
    ("LV", "Riga"), ("LY", "Tripoli"), ("MA", "Rabat"), ("MC", "Monaco"),
    ("MD", "Chisinau"), ("ME", "Podgorica"), ("MG", "Antananarivo"), ("MH", "Majuro"),
    ("MK", "Skopje"), ("ML", "Bamako"), ("MM", "Naypyidaw"), ("MN", "Ulaanbaatar"),
    ("MR", "Nouakchott"), ("MT", "Valletta"), ("MU", "Port Louis"), ("MV", "Male"),
    ("MW", "Lilongwe"), ("MX", "Mexico City"), ("MY", "Kuala Lumpur"), ("MZ", "Maputo"),
    ("NA", "Windhoek"), ("NE", "Niamey"), ("NG", "Abuja"), ("NI", "Managua"),
    ("NL", "Amsterdam"), ("NO", "Oslo"), ("NP", "Kathmandu"), ("NR", "Yaren"),
    ("NZ", "Wellington"), ("OM", "Muscat"), ("PA", "Panama City"), ("PE", "Lima"),
    ("PG", "Port Moresby"), ("PH", "Manila"), ("PK", "Islamabad"), ("PL", "Warsaw"),
    ("PR", "San Juan"), ("PS", "Ramallah"), ("PT", "Lisbon"), ("PW", "Ngerulmud"),
    ("PY", "Asuncion"), ("QA", "Doha"), ("RO", "Bucharest"), ("RS", "Belgrade"),
    ("RU", "Moscow"), ("RW", "Kigali"), ("SA", "Riyadh"), ("SB", "Honiara"),
    ("SC", "Victoria"), ("SD", "Khartoum"), ("SE", "Stockholm"), ("SG", "Singapore"),
    ("SI", "Ljubljana"), ("SK", "Bratislava"), ("SL", "Freetown"), ("SM", "San Marino"),
    ("SN", "Dakar"), ("SO", "Mogadishu"), ("SR", "Paramaribo"), ("SS", "Juba"),
    ("ST", "Sao Tome"), ("SV", "San Salvador"), ("SY", "Damascus"), ("SZ", "Mbabane"),
    ("TD", "N'Djamena"), ("TG", "Lome"), ("TH", "Bangkok"), ("TJ", "Dushanbe"),
    ("TL", "Dili"), ("TM", "Ashgabat"), ("TN", "Tunis"), ("TO", "Nuku'alofa"),
    ("TR", "Ankara"), ("TT", "Port of Spain"), ("TV", "Funafuti"), ("TW", "Taipei"),
    ("TZ", "Dodoma"), ("UA", "Kyiv"), ("UG", "Kampala"), ("US", "Washington, D.C."),
    ("UY", "Montevideo"), ("UZ", "Tashkent"), ("VA", "Vatican City"),
    ("VC", "Kingstown"), ("VE", "Caracas"), ("VN", "Hanoi"), ("VU", "Port Vila"),
    ("WS", "Apia"), ("XK", "Pristina"), ("XS", "Hargeisa"),
    ("YE", "Sana'a"), ("ZA", "Pretoria"), ("ZM", "Lusaka"), ("ZW", "Harare"),
];

fn capital_for(code: &str) -> Option<&'static str> {
    CAPITALS.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// Read and parse a GeoJSON FeatureCollection.
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection, CatalogError> {
    let mut bytes = fs::read(path)?;
    parse_feature_collection(&mut bytes)
}

/// Parse a FeatureCollection from raw bytes. The buffer is used as scratch space.
pub fn parse_feature_collection(bytes: &mut [u8]) -> Result<FeatureCollection, CatalogError> {
    let geojson: GeoJson = simd_json::serde::from_slice(bytes)?;
    Ok(FeatureCollection::try_from(geojson)?)
}

/// First string property among `keys` (Natural Earth mixes upper and lower case).
fn str_prop<'a>(feature: &'a Feature, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| feature.property(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn num_prop(feature: &Feature, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| feature.property(key).and_then(|v| v.as_f64()))
}

/// Natural Earth marks missing codes with -99 and friends.
fn usable_code(raw: &str) -> Option<&str> {
    match raw {
        "-99" | "-1" | "-99.0" | "nan" | "None" | "" => None,
        code => Some(code),
    }
}

/// Exterior rings of a (multi)polygon, slivers removed, closing point dropped.
fn exterior_rings(feature: &Feature) -> Vec<Vec<GeoPoint>> {
    let Some(geometry) = feature.geometry.as_ref() else {
        return Vec::new();
    };
    let exteriors: Vec<&Vec<Vec<f64>>> = match &geometry.value {
        Value::Polygon(rings) => rings.first().into_iter().collect(),
        Value::MultiPolygon(polygons) => polygons.iter().filter_map(|rings| rings.first()).collect(),
        _ => Vec::new(),
    };

    exteriors
        .into_iter()
        .filter(|ring| ring.len() >= MIN_POLYGON_POINTS)
        .map(|ring| {
            let mut points: Vec<GeoPoint> = ring
                .iter()
                .filter(|pos| pos.len() >= 2)
                .map(|pos| GeoPoint::new(pos[0], pos[1]))
                .collect();
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }
            points
        })
        .filter(|ring| ring.len() >= 3)
        .collect()
}

/// Name and code for an admin-0 feature after applying skips and overrides.
fn country_identity(feature: &Feature) -> Option<(String, String)> {
    let name = str_prop(feature, &["NAME", "name", "ADMIN", "admin"])?;
    if SKIP_NAMES.contains(&name) {
        tracing::debug!(name, "skipping non-sovereign territory");
        return None;
    }
    if let Some((_, entry)) = NAME_OVERRIDES.iter().find(|(n, _)| *n == name) {
        return entry.map(|(display, code)| (display.to_string(), code.to_string()));
    }
    if let Some((_, code)) = CODE_FIXES.iter().find(|(n, _)| *n == name) {
        return Some((name.to_string(), code.to_string()));
    }
    let raw = str_prop(feature, &["ISO_A2_EH", "iso_a2_eh", "ISO_A2", "iso_a2", "WB_A2", "wb_a2"])?;
    match usable_code(raw) {
        Some(code) => Some((name.to_string(), code.to_string())),
        None => {
            tracing::debug!(name, "skipping feature without an ISO code");
            None
        }
    }
}

/// Countries from an admin-0 collection, merged by code and sorted by code.
pub fn countries_from(collection: &FeatureCollection) -> Result<Vec<PolygonRegion>, CatalogError> {
    let entries: Vec<(String, String, Vec<Vec<GeoPoint>>)> = collection
        .features
        .par_iter()
        .filter_map(|feature| {
            let (name, code) = country_identity(feature)?;
            let rings = exterior_rings(feature);
            if rings.is_empty() {
                tracing::warn!(%name, %code, "skipping country without usable geometry");
                return None;
            }
            Some((name, code, rings))
        })
        .collect();

    let mut countries: Vec<PolygonRegion> = Vec::with_capacity(entries.len());
    let mut by_code: HashMap<String, usize> = HashMap::new();
    for (name, code, rings) in entries {
        if let Some(&idx) = by_code.get(&code) {
            for ring in rings {
                countries[idx].push_ring(ring)?;
            }
            continue;
        }
        let mut country = PolygonRegion::new(code.clone(), name, rings)?;
        if let Some(capital) = capital_for(&code) {
            country = country.with_capital(capital);
        }
        by_code.insert(code, countries.len());
        countries.push(country);
    }

    countries.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(countries)
}

/// Sub-national areas of `region` from an admin-1 collection.
///
/// Codes keep only the part after `-` (`US-CA` becomes `CA`) and each area keeps its
/// largest ring. Returns nothing for [`GameRegion::World`].
pub fn areas_from(collection: &FeatureCollection, region: GameRegion) -> Result<Vec<PolygonRegion>, CatalogError> {
    let Some(country) = region.profile().country_code else {
        return Ok(Vec::new());
    };

    let candidates: Vec<(String, String, Vec<GeoPoint>)> = collection
        .features
        .par_iter()
        .filter(|feature| str_prop(feature, &["iso_a2", "ISO_A2"]) == Some(country))
        .filter_map(|feature| {
            let full = str_prop(feature, &["iso_3166_2", "ISO_3166_2"])?;
            let code = full.rsplit('-').next().unwrap_or(full);
            if country == "US" && US_EXCLUDED.contains(&code) {
                return None;
            }
            let name = str_prop(feature, &["name", "NAME"])?;
            let largest = exterior_rings(feature).into_iter().max_by_key(Vec::len)?;
            Some((code.to_string(), name.to_string(), largest))
        })
        .collect();

    let mut areas: Vec<PolygonRegion> = Vec::with_capacity(candidates.len());
    for (code, name, ring) in candidates {
        if areas.iter().any(|a| a.code == code) {
            tracing::warn!(%code, %name, region = region.key(), "duplicate area code, keeping the first");
            continue;
        }
        areas.push(PolygonRegion::new(code, name, vec![ring])?);
    }
    Ok(areas)
}

/// Difficulty from Natural Earth's scale rank (lower ranks are better known).
fn difficulty_for_rank(rank: f64) -> Difficulty {
    if rank <= 2.0 {
        Difficulty::Easy
    } else if rank <= 5.0 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Cities from a populated-places collection. At most `limit` per country, most
/// populous first; national capitals are always kept.
pub fn cities_from(collection: &FeatureCollection, limit: usize) -> Vec<City> {
    let mut parsed: Vec<(City, f64)> = collection
        .features
        .par_iter()
        .filter_map(|feature| {
            let name = str_prop(feature, &["NAME", "name"])?;
            let code = usable_code(str_prop(feature, &["ISO_A2", "iso_a2"])?)?;
            let Some(geometry) = feature.geometry.as_ref() else {
                return None;
            };
            let Value::Point(pos) = &geometry.value else {
                return None;
            };
            if pos.len() < 2 {
                return None;
            }
            let population = num_prop(feature, &["POP_MAX", "pop_max", "POP_MIN", "pop_min"]).unwrap_or(0.0);
            let rank = num_prop(feature, &["SCALERANK", "scalerank"]).unwrap_or(10.0);
            let mut city = City::new(name, code, pos[0], pos[1]).difficulty(difficulty_for_rank(rank));
            city.is_capital = num_prop(feature, &["ADM0CAP", "adm0cap"]).is_some_and(|v| v >= 1.0);
            Some((city, population))
        })
        .collect();

    parsed.sort_by(|(a, pa), (b, pb)| {
        a.region_code
            .cmp(&b.region_code)
            .then(b.is_capital.cmp(&a.is_capital))
            .then(pb.total_cmp(pa))
    });

    let mut per_country: HashMap<String, usize> = HashMap::new();
    parsed
        .into_iter()
        .filter_map(|(city, _)| {
            let count = per_country.entry(city.region_code.clone()).or_default();
            *count += 1;
            (city.is_capital || *count <= limit).then_some(city)
        })
        .collect()
}
