//! Compact built-in geography used when no Natural Earth files are available.
//!
//! Outlines are hand-simplified (a dozen or so vertices each) and good enough for
//! a continent-scale flyover. Load the GeoJSON data for real borders.

use crate::data::catalog::{CatalogBuilder, GeoCatalog};
use crate::data::model::{City, Difficulty, PolygonRegion};
use crate::data::region::GameRegion;
use crate::error::CatalogError;
use crate::geo::GeoPoint;

type Outline = &'static [(f64, f64)];

struct CountryRow {
    code: &'static str,
    name: &'static str,
    capital: &'static str,
    population: u64,
    fact: Option<&'static str>,
    rings: &'static [Outline],
}

const COUNTRIES: &[CountryRow] = &[
    CountryRow {
        code: "AR",
        name: "Argentina",
        capital: "Buenos Aires",
        population: 46_000_000,
        fact: Some("Aconcagua is the highest peak outside Asia."),
        rings: &[&[
            (-65.7, -22.1), (-62.8, -22.0), (-57.6, -25.4), (-53.6, -26.9), (-58.4, -33.1),
            (-57.5, -38.2), (-62.3, -38.8), (-65.1, -42.0), (-67.6, -46.4), (-65.8, -47.8),
            (-69.2, -51.6), (-68.6, -52.3), (-72.3, -51.0), (-71.9, -44.0), (-71.1, -36.5),
            (-70.0, -33.0), (-68.6, -27.5), (-66.9, -22.8),
        ]],
    },
    CountryRow {
        code: "AU",
        name: "Australia",
        capital: "Canberra",
        population: 26_000_000,
        fact: Some("Australia is wider than the Moon."),
        rings: &[
            &[
                (113.6, -22.0), (114.1, -26.3), (115.0, -34.2), (118.0, -35.0), (123.6, -33.9),
                (131.2, -31.5), (135.0, -34.8), (137.8, -32.9), (138.2, -34.4), (140.6, -38.0),
                (146.3, -39.1), (150.0, -37.4), (153.1, -26.1), (149.9, -22.3), (145.4, -15.0),
                (142.5, -10.7), (141.6, -15.1), (136.8, -12.2), (130.6, -11.3), (129.5, -15.0),
                (125.7, -14.2), (121.0, -19.4),
            ],
            &[(144.7, -40.7), (148.3, -40.9), (148.0, -43.2), (146.0, -43.6), (145.2, -42.2)],
        ],
    },
    CountryRow {
        code: "BR",
        name: "Brazil",
        capital: "Brasilia",
        population: 216_000_000,
        fact: Some("Brazil borders every South American country except Chile and Ecuador."),
        rings: &[&[
            (-60.0, 5.2), (-51.6, 4.2), (-50.0, 0.0), (-44.5, -2.5), (-35.0, -5.5),
            (-35.2, -9.0), (-39.0, -13.5), (-39.7, -19.5), (-41.0, -22.0), (-48.6, -26.0),
            (-53.4, -33.7), (-57.6, -30.2), (-53.6, -26.9), (-54.6, -25.5), (-58.2, -20.2),
            (-60.2, -16.3), (-65.3, -10.8), (-70.5, -11.0), (-73.0, -7.4), (-69.9, -4.3),
            (-69.6, 1.1), (-64.0, 2.0),
        ]],
    },
    CountryRow {
        code: "CA",
        name: "Canada",
        capital: "Ottawa",
        population: 40_000_000,
        fact: Some("Canada has the longest coastline of any country."),
        rings: &[&[
            (-141.0, 69.6), (-141.0, 60.3), (-137.5, 58.9), (-130.0, 55.9), (-123.3, 48.3),
            (-95.2, 49.0), (-89.6, 48.0), (-83.1, 42.0), (-79.0, 43.3), (-74.7, 45.0),
            (-70.9, 45.3), (-67.8, 47.1), (-64.4, 45.3), (-60.0, 46.3), (-61.9, 49.1),
            (-56.1, 51.7), (-60.4, 55.4), (-64.5, 60.3), (-69.6, 59.0), (-77.5, 62.5),
            (-78.8, 56.3), (-82.3, 52.9), (-88.0, 56.5), (-94.1, 59.0), (-86.9, 66.6),
            (-95.0, 71.8), (-108.0, 67.4), (-120.1, 69.4), (-136.5, 68.9),
        ]],
    },
    CountryRow {
        code: "CL",
        name: "Chile",
        capital: "Santiago",
        population: 19_600_000,
        fact: None,
        rings: &[&[
            (-70.4, -18.3), (-69.5, -17.6), (-68.0, -21.5), (-68.6, -27.5), (-70.0, -33.0),
            (-71.1, -36.5), (-71.9, -44.0), (-72.3, -51.0), (-68.6, -52.3), (-70.0, -54.0),
            (-74.8, -52.8), (-75.6, -46.6), (-73.7, -37.2), (-71.6, -30.0), (-70.1, -22.0),
        ]],
    },
    CountryRow {
        code: "CN",
        name: "China",
        capital: "Beijing",
        population: 1_410_000_000,
        fact: Some("China uses a single time zone despite spanning five."),
        rings: &[&[
            (73.6, 39.5), (80.3, 42.0), (87.0, 49.1), (97.0, 42.8), (111.0, 43.5),
            (119.8, 49.5), (126.0, 53.0), (134.7, 48.3), (130.9, 42.5), (124.3, 40.0),
            (121.6, 40.9), (118.0, 39.2), (122.4, 37.5), (119.2, 34.9), (121.9, 30.9),
            (119.6, 25.0), (113.0, 22.0), (108.0, 21.5), (101.8, 21.2), (97.5, 24.7),
            (92.0, 27.8), (86.0, 27.9), (81.0, 30.3), (78.8, 32.3), (75.0, 35.6),
        ]],
    },
    CountryRow {
        code: "DE",
        name: "Germany",
        capital: "Berlin",
        population: 84_000_000,
        fact: None,
        rings: &[&[
            (6.0, 51.0), (7.0, 53.6), (8.8, 54.0), (8.7, 55.0), (11.0, 54.0),
            (14.2, 53.9), (14.7, 52.1), (15.0, 51.0), (12.2, 50.3), (13.8, 48.6),
            (13.0, 47.5), (10.2, 47.3), (7.6, 47.6), (8.2, 49.0), (6.4, 49.5),
        ]],
    },
    CountryRow {
        code: "EG",
        name: "Egypt",
        capital: "Cairo",
        population: 112_000_000,
        fact: None,
        rings: &[&[
            (25.0, 31.6), (29.0, 30.9), (32.3, 31.3), (34.2, 31.3), (34.9, 29.5),
            (33.0, 28.4), (35.8, 23.9), (36.9, 22.0), (25.0, 22.0),
        ]],
    },
    CountryRow {
        code: "ES",
        name: "Spain",
        capital: "Madrid",
        population: 48_000_000,
        fact: None,
        rings: &[&[
            (-9.3, 43.0), (-7.7, 43.8), (-1.8, 43.4), (3.2, 42.4), (3.0, 41.8),
            (0.8, 40.7), (-0.3, 39.4), (0.2, 38.7), (-2.1, 36.7), (-5.6, 36.0),
            (-7.4, 37.2), (-7.0, 39.7), (-8.9, 41.9),
        ]],
    },
    CountryRow {
        code: "FR",
        name: "France",
        capital: "Paris",
        population: 68_000_000,
        fact: Some("France spans more time zones than any other country."),
        rings: &[&[
            (-4.6, 48.6), (-1.4, 48.7), (1.6, 50.9), (2.5, 51.1), (4.2, 49.9),
            (6.4, 49.5), (8.2, 49.0), (7.6, 47.6), (6.0, 46.2), (7.0, 45.3),
            (7.5, 43.8), (3.1, 43.1), (3.2, 42.4), (-1.8, 43.4), (-1.2, 46.2),
            (-2.5, 47.3),
        ]],
    },
    CountryRow {
        code: "GB",
        name: "United Kingdom",
        capital: "London",
        population: 68_000_000,
        fact: None,
        rings: &[
            &[
                (-5.7, 50.0), (-3.0, 50.7), (1.3, 51.1), (1.7, 52.7), (0.2, 53.5),
                (-1.6, 55.6), (-2.0, 57.6), (-3.0, 58.6), (-5.0, 58.6), (-6.2, 56.8),
                (-5.0, 55.0), (-3.0, 54.9), (-3.2, 53.3), (-4.7, 52.8), (-5.1, 51.7),
                (-3.0, 51.2),
            ],
            &[(-8.2, 54.4), (-7.3, 55.2), (-6.0, 55.2), (-5.4, 54.4), (-6.3, 54.1), (-7.5, 54.1)],
        ],
    },
    CountryRow {
        code: "IE",
        name: "Ireland",
        capital: "Dublin",
        population: 5_300_000,
        fact: Some("Ireland has no native snakes."),
        rings: &[&[
            (-10.0, 51.6), (-8.2, 51.8), (-6.3, 52.2), (-6.0, 53.3), (-6.3, 54.1),
            (-7.5, 54.1), (-8.2, 54.4), (-7.3, 55.2), (-8.5, 55.2), (-10.1, 54.2),
            (-9.9, 53.3), (-10.5, 52.1),
        ]],
    },
    CountryRow {
        code: "IN",
        name: "India",
        capital: "New Delhi",
        population: 1_430_000_000,
        fact: None,
        rings: &[&[
            (68.2, 23.7), (70.2, 20.9), (72.8, 20.6), (73.5, 16.0), (76.3, 9.5),
            (77.5, 8.1), (80.3, 13.0), (80.3, 15.9), (86.5, 20.2), (88.0, 21.6),
            (89.1, 22.0), (92.3, 21.5), (92.6, 25.0), (97.3, 27.9), (92.0, 27.8),
            (88.1, 27.9), (81.0, 30.3), (78.8, 32.3), (75.0, 35.6), (74.4, 31.8),
            (71.0, 28.0),
        ]],
    },
    CountryRow {
        code: "IS",
        name: "Iceland",
        capital: "Reykjavik",
        population: 390_000,
        fact: None,
        rings: &[&[
            (-22.0, 64.0), (-24.3, 65.6), (-21.0, 66.2), (-16.2, 66.5), (-14.5, 65.3),
            (-13.6, 65.1), (-14.9, 64.4), (-18.7, 63.4), (-21.8, 63.8),
        ]],
    },
    CountryRow {
        code: "IT",
        name: "Italy",
        capital: "Rome",
        population: 59_000_000,
        fact: None,
        rings: &[
            &[
                (7.5, 43.8), (7.0, 45.3), (6.8, 45.9), (10.2, 46.6), (13.7, 46.5),
                (13.6, 45.6), (12.3, 44.9), (13.6, 43.5), (16.0, 41.9), (18.5, 40.2),
                (17.0, 39.0), (15.6, 38.0), (15.8, 40.0), (12.2, 41.7), (10.5, 42.9),
            ],
            &[(12.4, 38.0), (15.6, 38.3), (15.1, 36.6)],
        ],
    },
    CountryRow {
        code: "JP",
        name: "Japan",
        capital: "Tokyo",
        population: 124_000_000,
        fact: Some("Japan is made up of over 14,000 islands."),
        rings: &[
            &[
                (130.9, 34.0), (132.6, 35.4), (135.8, 35.6), (136.9, 37.1), (139.5, 38.1),
                (140.0, 40.0), (141.5, 41.4), (142.0, 39.5), (141.0, 37.0), (140.8, 35.7),
                (139.2, 34.9), (136.8, 34.3), (135.1, 33.8), (132.5, 34.3),
            ],
            &[(140.0, 41.5), (141.3, 45.4), (145.5, 43.3), (143.3, 42.0)],
            &[(129.7, 33.1), (131.9, 33.9), (131.3, 31.4), (130.2, 31.2)],
        ],
    },
    CountryRow {
        code: "KE",
        name: "Kenya",
        capital: "Nairobi",
        population: 55_000_000,
        fact: None,
        rings: &[&[
            (34.0, 4.2), (35.9, 5.0), (41.9, 4.0), (41.0, 2.8), (41.6, -1.7),
            (39.2, -4.7), (37.7, -3.1), (34.0, -1.0), (35.0, 1.9),
        ]],
    },
    CountryRow {
        code: "MX",
        name: "Mexico",
        capital: "Mexico City",
        population: 129_000_000,
        fact: None,
        rings: &[&[
            (-117.1, 32.5), (-114.8, 32.5), (-111.0, 31.3), (-108.2, 31.3), (-106.5, 31.8),
            (-104.5, 29.6), (-102.5, 29.8), (-99.5, 27.5), (-97.1, 25.9), (-97.7, 22.0),
            (-96.3, 19.3), (-94.5, 18.2), (-91.0, 18.6), (-90.4, 21.0), (-87.0, 21.5),
            (-88.0, 18.5), (-89.1, 17.8), (-91.4, 17.2), (-92.2, 14.5), (-96.5, 15.7),
            (-105.5, 20.0), (-105.3, 23.3), (-109.4, 26.0), (-112.2, 29.0), (-114.5, 31.0),
            (-112.8, 27.8), (-109.4, 23.2), (-112.1, 24.7), (-115.9, 29.6),
        ]],
    },
    CountryRow {
        code: "NO",
        name: "Norway",
        capital: "Oslo",
        population: 5_500_000,
        fact: None,
        rings: &[&[
            (5.0, 62.0), (5.5, 59.0), (7.0, 58.0), (10.5, 59.2), (11.8, 59.1),
            (12.5, 61.0), (12.1, 63.8), (14.5, 65.3), (16.5, 67.8), (20.0, 69.0),
            (25.0, 68.8), (28.9, 69.1), (31.0, 70.3), (25.0, 71.1), (18.0, 70.0),
            (13.0, 67.5), (10.0, 64.0),
        ]],
    },
    CountryRow {
        code: "NZ",
        name: "New Zealand",
        capital: "Wellington",
        population: 5_200_000,
        fact: None,
        rings: &[
            &[(172.7, -34.4), (174.7, -36.9), (178.5, -37.7), (177.0, -39.3), (174.8, -41.3), (173.8, -39.2), (174.6, -37.3)],
            &[(172.7, -40.5), (174.3, -41.7), (172.7, -43.8), (171.2, -44.5), (169.3, -46.6), (166.5, -46.0), (168.4, -44.0), (171.5, -41.8)],
        ],
    },
    CountryRow {
        code: "PE",
        name: "Peru",
        capital: "Lima",
        population: 34_000_000,
        fact: None,
        rings: &[&[
            (-81.3, -4.3), (-80.3, -3.4), (-78.3, -3.4), (-75.4, -0.1), (-73.0, -2.5),
            (-70.0, -4.3), (-73.0, -7.4), (-70.5, -11.0), (-69.0, -13.0), (-69.5, -17.6),
            (-70.4, -18.3), (-76.0, -14.6), (-79.8, -7.2),
        ]],
    },
    CountryRow {
        code: "RU",
        name: "Russia",
        capital: "Moscow",
        population: 146_000_000,
        fact: Some("Russia spans eleven time zones."),
        rings: &[&[
            (28.0, 56.1), (27.7, 57.8), (28.0, 59.5), (30.0, 60.0), (29.0, 61.2),
            (30.0, 63.5), (29.0, 66.0), (31.0, 70.3), (41.1, 67.5), (44.0, 68.6),
            (68.5, 68.1), (72.4, 66.2), (74.7, 72.8), (107.0, 77.0), (131.3, 70.8),
            (178.6, 69.4), (179.9, 65.0), (179.2, 62.3), (163.5, 59.9), (156.8, 51.0),
            (155.9, 56.8), (135.1, 54.7), (141.4, 52.2), (134.7, 48.3), (126.0, 53.0),
            (119.8, 49.5), (111.0, 49.3), (97.0, 50.0), (87.0, 49.1), (80.0, 50.8),
            (69.0, 55.4), (61.0, 50.8), (50.0, 51.0), (46.7, 48.0), (47.5, 45.6),
            (47.0, 42.0), (40.0, 43.4), (38.0, 47.0), (40.0, 49.6), (35.4, 50.5),
            (31.8, 52.1), (32.7, 55.5),
        ]],
    },
    CountryRow {
        code: "US",
        name: "United States",
        capital: "Washington, D.C.",
        population: 335_000_000,
        fact: Some("Alaska is the westernmost, northernmost, and easternmost state."),
        rings: &[
            &[
                (-124.7, 48.4), (-123.3, 48.3), (-95.2, 49.0), (-89.6, 48.0), (-83.1, 42.0),
                (-79.0, 43.3), (-74.7, 45.0), (-70.9, 45.3), (-67.8, 47.1), (-67.0, 44.8),
                (-70.6, 41.5), (-74.0, 40.6), (-76.0, 37.0), (-75.5, 35.2), (-81.1, 31.8),
                (-80.0, 26.8), (-81.8, 24.6), (-82.8, 27.8), (-84.0, 30.1), (-89.6, 30.2),
                (-94.0, 29.7), (-97.1, 25.9), (-99.5, 27.5), (-102.5, 29.8), (-104.5, 29.6),
                (-106.5, 31.8), (-108.2, 31.3), (-111.0, 31.3), (-114.8, 32.5), (-117.1, 32.5),
                (-120.6, 34.6), (-122.4, 37.2), (-124.2, 40.4), (-124.1, 46.2),
            ],
            &[
                (-141.0, 69.6), (-141.0, 60.3), (-147.0, 60.9), (-152.0, 58.9), (-158.0, 56.0),
                (-164.8, 54.4), (-157.0, 58.9), (-162.0, 60.0), (-166.1, 61.5), (-160.8, 64.8),
                (-168.1, 65.7), (-156.6, 71.4),
            ],
        ],
    },
    CountryRow {
        code: "ZA",
        name: "South Africa",
        capital: "Pretoria",
        population: 62_000_000,
        fact: Some("South Africa has three capital cities."),
        rings: &[&[
            (16.5, -28.6), (20.0, -24.8), (20.0, -22.0), (26.0, -24.6), (29.4, -22.1),
            (31.3, -22.4), (32.0, -26.8), (32.9, -26.9), (30.0, -31.3), (25.6, -34.0),
            (22.5, -34.0), (18.4, -34.3), (17.9, -32.0),
        ]],
    },
];

/// (code, name, outline) for sub-national areas.
type AreaRow = (&'static str, &'static str, Outline);

const US_STATES: &[AreaRow] = &[
    ("CO", "Colorado", &[(-109.05, 41.0), (-102.05, 41.0), (-102.05, 37.0), (-109.05, 37.0)]),
    ("WY", "Wyoming", &[(-111.05, 45.0), (-104.05, 45.0), (-104.05, 41.0), (-111.05, 41.0)]),
    ("UT", "Utah", &[(-114.05, 42.0), (-111.05, 42.0), (-111.05, 41.0), (-109.05, 41.0), (-109.05, 37.0), (-114.05, 37.0)]),
    ("NM", "New Mexico", &[(-109.05, 37.0), (-103.0, 37.0), (-103.0, 32.0), (-106.6, 32.0), (-106.5, 31.8), (-108.2, 31.8), (-108.2, 31.3), (-109.05, 31.3)]),
    ("KS", "Kansas", &[(-102.05, 40.0), (-95.3, 40.0), (-94.6, 39.1), (-94.6, 37.0), (-102.05, 37.0)]),
    ("NE", "Nebraska", &[(-104.05, 43.0), (-98.5, 43.0), (-96.5, 42.5), (-95.3, 40.0), (-102.05, 40.0), (-102.05, 41.0), (-104.05, 41.0)]),
    ("ND", "North Dakota", &[(-104.05, 49.0), (-97.2, 49.0), (-96.6, 45.9), (-104.05, 45.9)]),
    ("SD", "South Dakota", &[(-104.05, 45.9), (-96.6, 45.9), (-96.5, 42.5), (-98.5, 43.0), (-104.05, 43.0)]),
    ("MT", "Montana", &[(-116.05, 49.0), (-104.05, 49.0), (-104.05, 45.0), (-111.05, 45.0), (-111.05, 44.5), (-113.0, 44.5), (-114.5, 46.6), (-116.05, 47.9)]),
    ("AZ", "Arizona", &[(-114.8, 37.0), (-109.05, 37.0), (-109.05, 31.3), (-111.0, 31.3), (-114.8, 32.5), (-114.5, 34.2)]),
    ("NV", "Nevada", &[(-120.0, 42.0), (-114.05, 42.0), (-114.05, 36.1), (-114.6, 35.0), (-120.0, 39.0)]),
    ("WA", "Washington", &[(-124.7, 48.4), (-123.3, 48.3), (-117.05, 49.0), (-117.05, 46.0), (-119.0, 46.0), (-121.2, 45.6), (-124.0, 46.3)]),
    ("OR", "Oregon", &[(-124.0, 46.3), (-121.2, 45.6), (-119.0, 46.0), (-117.05, 46.0), (-116.5, 44.0), (-117.05, 42.0), (-124.2, 42.0)]),
    ("TX", "Texas", &[(-106.6, 32.0), (-103.0, 32.0), (-103.0, 36.5), (-100.0, 36.5), (-100.0, 34.6), (-94.0, 33.6), (-94.0, 29.7), (-97.1, 25.9), (-99.5, 27.5), (-102.5, 29.8), (-104.5, 29.6)]),
];

const UK_COUNTIES: &[AreaRow] = &[
    ("CON", "Cornwall", &[(-5.7, 50.0), (-4.2, 50.3), (-4.4, 50.9), (-4.6, 50.9), (-5.1, 50.4)]),
    ("DEV", "Devon", &[(-4.2, 50.3), (-3.0, 50.7), (-2.9, 51.0), (-3.6, 51.2), (-4.4, 50.9)]),
    ("KEN", "Kent", &[(0.0, 51.3), (0.6, 51.5), (1.4, 51.4), (1.0, 51.0), (0.3, 51.1)]),
    ("LND", "Greater London", &[(-0.5, 51.5), (-0.2, 51.7), (0.2, 51.6), (0.3, 51.4), (0.0, 51.3), (-0.4, 51.4)]),
    ("NYK", "North Yorkshire", &[(-2.5, 54.5), (-0.5, 54.5), (-0.2, 54.1), (-1.0, 53.8), (-2.2, 53.9)]),
    ("CMA", "Cumbria", &[(-3.6, 54.3), (-3.0, 55.0), (-2.6, 55.1), (-2.2, 54.7), (-2.5, 54.2), (-3.2, 54.1)]),
    ("HLD", "Highland", &[(-6.2, 56.8), (-5.0, 58.6), (-3.0, 58.6), (-3.9, 57.6), (-4.5, 56.8)]),
];

const IRELAND_COUNTIES: &[AreaRow] = &[
    ("D", "Dublin", &[(-6.5, 53.2), (-6.0, 53.2), (-6.1, 53.6), (-6.5, 53.5)]),
    ("CO", "Cork", &[(-10.0, 51.6), (-8.2, 51.8), (-7.9, 52.1), (-8.4, 52.4), (-9.4, 52.0)]),
    ("KY", "Kerry", &[(-10.5, 51.8), (-9.4, 52.0), (-9.3, 52.6), (-10.4, 52.2)]),
    ("G", "Galway", &[(-10.2, 53.3), (-8.9, 53.2), (-8.0, 53.2), (-8.5, 53.7), (-9.9, 53.6)]),
    ("DL", "Donegal", &[(-8.7, 54.5), (-7.4, 54.6), (-7.3, 55.2), (-8.5, 55.2)]),
    ("MO", "Mayo", &[(-10.1, 54.2), (-9.0, 54.2), (-8.7, 53.8), (-9.9, 53.6)]),
];

const CANADIAN_PROVINCES: &[AreaRow] = &[
    ("AB", "Alberta", &[(-120.0, 60.0), (-110.0, 60.0), (-110.0, 49.0), (-114.1, 49.0), (-120.0, 53.8)]),
    ("SK", "Saskatchewan", &[(-110.0, 60.0), (-102.0, 60.0), (-101.4, 49.0), (-110.0, 49.0)]),
    ("MB", "Manitoba", &[(-102.0, 60.0), (-94.8, 60.0), (-89.0, 56.9), (-95.2, 53.0), (-95.2, 49.0), (-101.4, 49.0)]),
    ("BC", "British Columbia", &[(-139.0, 60.0), (-120.0, 60.0), (-120.0, 53.8), (-114.1, 49.0), (-123.3, 48.3), (-127.9, 50.8), (-130.0, 55.9), (-137.5, 58.9)]),
    ("ON", "Ontario", &[(-95.2, 53.0), (-89.0, 56.9), (-82.3, 52.9), (-79.5, 51.5), (-79.5, 46.0), (-74.7, 45.0), (-79.0, 43.3), (-83.1, 42.0), (-89.6, 48.0), (-95.2, 49.0)]),
    ("QC", "Quebec", &[(-79.5, 51.5), (-78.8, 56.3), (-77.5, 62.5), (-69.6, 59.0), (-64.5, 60.3), (-67.0, 52.0), (-57.1, 51.4), (-64.4, 49.0), (-70.9, 45.3), (-74.7, 45.0), (-79.5, 46.0)]),
];

/// (name, region code, lon, lat, capital, difficulty)
type CityRow = (&'static str, &'static str, f64, f64, bool, Difficulty);

const CITIES: &[CityRow] = &[
    ("Buenos Aires", "AR", -58.4, -34.6, true, Difficulty::Easy),
    ("Cordoba", "AR", -64.2, -31.4, false, Difficulty::Medium),
    ("Ushuaia", "AR", -68.3, -54.8, false, Difficulty::Hard),
    ("Canberra", "AU", 149.1, -35.3, true, Difficulty::Medium),
    ("Sydney", "AU", 151.2, -33.9, false, Difficulty::Easy),
    ("Perth", "AU", 115.9, -31.95, false, Difficulty::Medium),
    ("Brasilia", "BR", -47.9, -15.8, true, Difficulty::Medium),
    ("Rio de Janeiro", "BR", -43.2, -22.9, false, Difficulty::Easy),
    ("Manaus", "BR", -60.0, -3.1, false, Difficulty::Hard),
    ("Ottawa", "CA", -75.7, 45.4, true, Difficulty::Medium),
    ("Toronto", "CA", -79.4, 43.7, false, Difficulty::Easy),
    ("Vancouver", "CA", -123.1, 49.3, false, Difficulty::Easy),
    ("Calgary", "CA", -114.1, 51.0, false, Difficulty::Medium),
    ("Winnipeg", "CA", -97.1, 49.9, false, Difficulty::Medium),
    ("Santiago", "CL", -70.7, -33.4, true, Difficulty::Easy),
    ("Beijing", "CN", 116.4, 39.9, true, Difficulty::Easy),
    ("Shanghai", "CN", 121.5, 31.2, false, Difficulty::Easy),
    ("Chengdu", "CN", 104.1, 30.7, false, Difficulty::Hard),
    ("Berlin", "DE", 13.4, 52.5, true, Difficulty::Easy),
    ("Munich", "DE", 11.6, 48.1, false, Difficulty::Medium),
    ("Cairo", "EG", 31.2, 30.0, true, Difficulty::Easy),
    ("Madrid", "ES", -3.7, 40.4, true, Difficulty::Easy),
    ("Barcelona", "ES", 2.2, 41.4, false, Difficulty::Easy),
    ("Paris", "FR", 2.35, 48.86, true, Difficulty::Easy),
    ("Lyon", "FR", 4.8, 45.8, false, Difficulty::Medium),
    ("London", "GB", -0.13, 51.5, true, Difficulty::Easy),
    ("Edinburgh", "GB", -3.2, 55.95, false, Difficulty::Medium),
    ("Manchester", "GB", -2.24, 53.48, false, Difficulty::Medium),
    ("Plymouth", "GB", -4.14, 50.37, false, Difficulty::Hard),
    ("Dublin", "IE", -6.26, 53.35, true, Difficulty::Easy),
    ("Cork", "IE", -8.47, 51.9, false, Difficulty::Medium),
    ("Galway", "IE", -9.05, 53.27, false, Difficulty::Medium),
    ("New Delhi", "IN", 77.2, 28.6, true, Difficulty::Easy),
    ("Mumbai", "IN", 72.9, 19.1, false, Difficulty::Easy),
    ("Reykjavik", "IS", -21.9, 64.1, true, Difficulty::Medium),
    ("Rome", "IT", 12.5, 41.9, true, Difficulty::Easy),
    ("Milan", "IT", 9.2, 45.5, false, Difficulty::Easy),
    ("Tokyo", "JP", 139.7, 35.7, true, Difficulty::Easy),
    ("Osaka", "JP", 135.5, 34.7, false, Difficulty::Medium),
    ("Sapporo", "JP", 141.35, 43.06, false, Difficulty::Hard),
    ("Nairobi", "KE", 36.8, -1.3, true, Difficulty::Medium),
    ("Mexico City", "MX", -99.1, 19.4, true, Difficulty::Easy),
    ("Guadalajara", "MX", -103.3, 20.7, false, Difficulty::Medium),
    ("Oslo", "NO", 10.75, 59.9, true, Difficulty::Medium),
    ("Tromso", "NO", 18.96, 69.65, false, Difficulty::Hard),
    ("Wellington", "NZ", 174.8, -41.3, true, Difficulty::Medium),
    ("Auckland", "NZ", 174.8, -36.85, false, Difficulty::Easy),
    ("Lima", "PE", -77.0, -12.0, true, Difficulty::Medium),
    ("Moscow", "RU", 37.6, 55.8, true, Difficulty::Easy),
    ("Novosibirsk", "RU", 82.9, 55.0, false, Difficulty::Hard),
    ("Vladivostok", "RU", 131.9, 43.1, false, Difficulty::Hard),
    ("Washington, D.C.", "US", -77.0, 38.9, true, Difficulty::Easy),
    ("New York", "US", -74.0, 40.7, false, Difficulty::Easy),
    ("Los Angeles", "US", -118.2, 34.05, false, Difficulty::Easy),
    ("Denver", "US", -104.99, 39.74, false, Difficulty::Medium),
    ("Salt Lake City", "US", -111.9, 40.76, false, Difficulty::Medium),
    ("Cheyenne", "US", -104.82, 41.14, false, Difficulty::Hard),
    ("Seattle", "US", -122.33, 47.6, false, Difficulty::Easy),
    ("Anchorage", "US", -149.9, 61.2, false, Difficulty::Medium),
    ("Pretoria", "ZA", 28.2, -25.75, true, Difficulty::Medium),
    ("Cape Town", "ZA", 18.4, -33.9, false, Difficulty::Easy),
];

/// Build the catalog from the tables above.
pub fn builtin_catalog() -> Result<GeoCatalog, CatalogError> {
    let mut builder = GeoCatalog::builder();
    add_countries(&mut builder)?;
    for region in GameRegion::all() {
        add_areas(&mut builder, region)?;
    }
    add_cities(&mut builder);
    builder.build()
}

/// Add the built-in country outlines.
pub fn add_countries(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    for row in COUNTRIES {
        let rings: Vec<Vec<GeoPoint>> = row
            .rings
            .iter()
            .map(|ring| ring.iter().copied().map(GeoPoint::from).collect())
            .collect();
        let mut country = PolygonRegion::new(row.code, row.name, rings)?
            .with_capital(row.capital)
            .with_population(row.population);
        if let Some(fact) = row.fact {
            country = country.with_fun_fact(fact);
        }
        builder.country(country);
    }
    Ok(())
}

/// Add the built-in sub-national areas for `region`. No-op for the world.
pub fn add_areas(builder: &mut CatalogBuilder, region: GameRegion) -> Result<(), CatalogError> {
    let rows: &[AreaRow] = match region {
        GameRegion::World => &[],
        GameRegion::UsStates => US_STATES,
        GameRegion::UkCounties => UK_COUNTIES,
        GameRegion::Ireland => IRELAND_COUNTIES,
        GameRegion::CanadianProvinces => CANADIAN_PROVINCES,
    };
    for &(code, name, outline) in rows {
        builder.area(region, PolygonRegion::from_outline(code, name, outline)?);
    }
    Ok(())
}

/// Add the built-in city list.
pub fn add_cities(builder: &mut CatalogBuilder) {
    for &(name, code, lon, lat, is_capital, difficulty) in CITIES {
        let mut city = City::new(name, code, lon, lat).difficulty(difficulty);
        city.is_capital = is_capital;
        builder.city(city);
    }
}
