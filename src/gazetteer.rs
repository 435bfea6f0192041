//! Static lookup tables: gazetteer, disease dictionary, air hubs and airport coordinates.
//!
//! Order matters. Gazetteer cities precede countries so the first alias hit is the most
//! specific place; disease terms are re-sorted by length at lookup time.

pub struct GeoEntry {
    pub keys: &'static [&'static str],
    pub lat: f64,
    pub lng: f64,
    pub name: &'static str,
    pub country: &'static str,
    pub iso: &'static str,
    pub region: &'static str,
}

pub struct DiseaseEntry {
    pub term: &'static str,
    pub category: &'static str,
    pub severity: u8,
    pub glyph: &'static str,
}

pub struct AirHub {
    pub city: &'static str,
    pub iata: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub routes: &'static [&'static str],
}

pub struct Airport {
    pub iata: &'static str,
    pub lat: f64,
    pub lng: f64,
}

pub static GAZETTEER: &[GeoEntry] = &[
    GeoEntry { keys: &["chiang mai"], lat: 18.79, lng: 98.98, name: "Chiang Mai", country: "Thailand", iso: "TH", region: "SE Asia" },
    GeoEntry { keys: &["phuket"], lat: 7.88, lng: 98.39, name: "Phuket", country: "Thailand", iso: "TH", region: "SE Asia" },
    GeoEntry { keys: &["bangkok"], lat: 13.75, lng: 100.5, name: "Bangkok", country: "Thailand", iso: "TH", region: "SE Asia" },
    GeoEntry { keys: &["bali", "denpasar"], lat: -8.34, lng: 115.09, name: "Bali", country: "Indonesia", iso: "ID", region: "SE Asia" },
    GeoEntry { keys: &["jakarta"], lat: -6.21, lng: 106.85, name: "Jakarta", country: "Indonesia", iso: "ID", region: "SE Asia" },
    GeoEntry { keys: &["hanoi"], lat: 21.03, lng: 105.85, name: "Hanoi", country: "Vietnam", iso: "VN", region: "SE Asia" },
    GeoEntry { keys: &["ho chi minh", "saigon"], lat: 10.82, lng: 106.63, name: "Ho Chi Minh City", country: "Vietnam", iso: "VN", region: "SE Asia" },
    GeoEntry { keys: &["phnom penh"], lat: 11.56, lng: 104.92, name: "Phnom Penh", country: "Cambodia", iso: "KH", region: "SE Asia" },
    GeoEntry { keys: &["siem reap"], lat: 13.36, lng: 103.86, name: "Siem Reap", country: "Cambodia", iso: "KH", region: "SE Asia" },
    GeoEntry { keys: &["manila"], lat: 14.6, lng: 120.98, name: "Manila", country: "Philippines", iso: "PH", region: "SE Asia" },
    GeoEntry { keys: &["kuala lumpur"], lat: 3.14, lng: 101.69, name: "Kuala Lumpur", country: "Malaysia", iso: "MY", region: "SE Asia" },
    GeoEntry { keys: &["delhi", "new delhi"], lat: 28.61, lng: 77.21, name: "Delhi", country: "India", iso: "IN", region: "South Asia" },
    GeoEntry { keys: &["mumbai", "bombay"], lat: 19.07, lng: 72.88, name: "Mumbai", country: "India", iso: "IN", region: "South Asia" },
    GeoEntry { keys: &["goa"], lat: 15.3, lng: 74.12, name: "Goa", country: "India", iso: "IN", region: "South Asia" },
    GeoEntry { keys: &["kolkata", "calcutta"], lat: 22.57, lng: 88.36, name: "Kolkata", country: "India", iso: "IN", region: "South Asia" },
    GeoEntry { keys: &["chennai", "madras"], lat: 13.08, lng: 80.27, name: "Chennai", country: "India", iso: "IN", region: "South Asia" },
    GeoEntry { keys: &["kathmandu"], lat: 27.72, lng: 85.32, name: "Kathmandu", country: "Nepal", iso: "NP", region: "South Asia" },
    GeoEntry { keys: &["dhaka", "dacca"], lat: 23.81, lng: 90.41, name: "Dhaka", country: "Bangladesh", iso: "BD", region: "South Asia" },
    GeoEntry { keys: &["colombo"], lat: 6.93, lng: 79.84, name: "Colombo", country: "Sri Lanka", iso: "LK", region: "South Asia" },
    GeoEntry { keys: &["cancun", "cancún"], lat: 21.16, lng: -86.85, name: "Cancún", country: "Mexico", iso: "MX", region: "Latin America" },
    GeoEntry { keys: &["mexico city", "ciudad de mexico"], lat: 19.43, lng: -99.13, name: "Mexico City", country: "Mexico", iso: "MX", region: "Latin America" },
    GeoEntry { keys: &["lima"], lat: -12.05, lng: -77.04, name: "Lima", country: "Peru", iso: "PE", region: "Latin America" },
    GeoEntry { keys: &["cusco", "cuzco"], lat: -13.53, lng: -71.97, name: "Cusco", country: "Peru", iso: "PE", region: "Latin America" },
    GeoEntry { keys: &["bogota", "bogotá"], lat: 4.71, lng: -74.07, name: "Bogotá", country: "Colombia", iso: "CO", region: "Latin America" },
    GeoEntry { keys: &["cartagena"], lat: 10.39, lng: -75.51, name: "Cartagena", country: "Colombia", iso: "CO", region: "Latin America" },
    GeoEntry { keys: &["rio de janeiro", "rio"], lat: -22.91, lng: -43.17, name: "Rio de Janeiro", country: "Brazil", iso: "BR", region: "Latin America" },
    GeoEntry { keys: &["sao paulo", "são paulo"], lat: -23.55, lng: -46.63, name: "São Paulo", country: "Brazil", iso: "BR", region: "Latin America" },
    GeoEntry { keys: &["buenos aires"], lat: -34.6, lng: -58.38, name: "Buenos Aires", country: "Argentina", iso: "AR", region: "Latin America" },
    GeoEntry { keys: &["nairobi"], lat: -1.29, lng: 36.82, name: "Nairobi", country: "Kenya", iso: "KE", region: "East Africa" },
    GeoEntry { keys: &["mombasa"], lat: -4.05, lng: 39.67, name: "Mombasa", country: "Kenya", iso: "KE", region: "East Africa" },
    GeoEntry { keys: &["dar es salaam"], lat: -6.79, lng: 39.28, name: "Dar es Salaam", country: "Tanzania", iso: "TZ", region: "East Africa" },
    GeoEntry { keys: &["zanzibar"], lat: -6.17, lng: 39.2, name: "Zanzibar", country: "Tanzania", iso: "TZ", region: "East Africa" },
    GeoEntry { keys: &["kampala"], lat: 0.35, lng: 32.58, name: "Kampala", country: "Uganda", iso: "UG", region: "East Africa" },
    GeoEntry { keys: &["addis ababa"], lat: 9.02, lng: 38.75, name: "Addis Ababa", country: "Ethiopia", iso: "ET", region: "East Africa" },
    GeoEntry { keys: &["kigali"], lat: -1.97, lng: 30.1, name: "Kigali", country: "Rwanda", iso: "RW", region: "East Africa" },
    GeoEntry { keys: &["kinshasa"], lat: -4.44, lng: 15.27, name: "Kinshasa", country: "DR Congo", iso: "CD", region: "Central Africa" },
    GeoEntry { keys: &["lagos"], lat: 6.52, lng: 3.38, name: "Lagos", country: "Nigeria", iso: "NG", region: "West Africa" },
    GeoEntry { keys: &["accra"], lat: 5.6, lng: -0.19, name: "Accra", country: "Ghana", iso: "GH", region: "West Africa" },
    GeoEntry { keys: &["dakar"], lat: 14.69, lng: -17.44, name: "Dakar", country: "Senegal", iso: "SN", region: "West Africa" },
    GeoEntry { keys: &["cairo"], lat: 30.04, lng: 31.24, name: "Cairo", country: "Egypt", iso: "EG", region: "North Africa" },
    GeoEntry { keys: &["marrakech", "marrakesh"], lat: 31.63, lng: -8.01, name: "Marrakech", country: "Morocco", iso: "MA", region: "North Africa" },
    GeoEntry { keys: &["cape town"], lat: -33.93, lng: 18.42, name: "Cape Town", country: "South Africa", iso: "ZA", region: "Southern Africa" },
    GeoEntry { keys: &["johannesburg"], lat: -26.2, lng: 28.05, name: "Johannesburg", country: "South Africa", iso: "ZA", region: "Southern Africa" },
    GeoEntry { keys: &["beijing", "peking"], lat: 39.9, lng: 116.41, name: "Beijing", country: "China", iso: "CN", region: "East Asia" },
    GeoEntry { keys: &["shanghai"], lat: 31.23, lng: 121.47, name: "Shanghai", country: "China", iso: "CN", region: "East Asia" },
    GeoEntry { keys: &["hong kong"], lat: 22.32, lng: 114.17, name: "Hong Kong", country: "China", iso: "CN", region: "East Asia" },
    GeoEntry { keys: &["tokyo"], lat: 35.68, lng: 139.69, name: "Tokyo", country: "Japan", iso: "JP", region: "East Asia" },
    GeoEntry { keys: &["singapore"], lat: 1.35, lng: 103.82, name: "Singapore", country: "Singapore", iso: "SG", region: "SE Asia" },
    GeoEntry { keys: &["sydney"], lat: -33.87, lng: 151.21, name: "Sydney", country: "Australia", iso: "AU", region: "Oceania" },
    GeoEntry { keys: &["istanbul"], lat: 41.01, lng: 28.98, name: "Istanbul", country: "Turkey", iso: "TR", region: "Middle East" },
    GeoEntry { keys: &["dubai"], lat: 25.2, lng: 55.27, name: "Dubai", country: "UAE", iso: "AE", region: "Middle East" },
    // countries
    GeoEntry { keys: &["thailand"], lat: 13.75, lng: 100.5, name: "Thailand", country: "Thailand", iso: "TH", region: "SE Asia" },
    GeoEntry { keys: &["indonesia"], lat: -2.5, lng: 118.0, name: "Indonesia", country: "Indonesia", iso: "ID", region: "SE Asia" },
    GeoEntry { keys: &["vietnam"], lat: 14.06, lng: 108.28, name: "Vietnam", country: "Vietnam", iso: "VN", region: "SE Asia" },
    GeoEntry { keys: &["cambodia"], lat: 12.57, lng: 104.99, name: "Cambodia", country: "Cambodia", iso: "KH", region: "SE Asia" },
    GeoEntry { keys: &["philippines"], lat: 12.88, lng: 121.77, name: "Philippines", country: "Philippines", iso: "PH", region: "SE Asia" },
    GeoEntry { keys: &["malaysia"], lat: 4.21, lng: 101.98, name: "Malaysia", country: "Malaysia", iso: "MY", region: "SE Asia" },
    GeoEntry { keys: &["myanmar", "burma"], lat: 21.91, lng: 95.96, name: "Myanmar", country: "Myanmar", iso: "MM", region: "SE Asia" },
    GeoEntry { keys: &["laos"], lat: 19.86, lng: 102.5, name: "Laos", country: "Laos", iso: "LA", region: "SE Asia" },
    GeoEntry { keys: &["india"], lat: 20.59, lng: 78.96, name: "India", country: "India", iso: "IN", region: "South Asia" },
    GeoEntry { keys: &["nepal"], lat: 28.39, lng: 84.12, name: "Nepal", country: "Nepal", iso: "NP", region: "South Asia" },
    GeoEntry { keys: &["bangladesh"], lat: 23.68, lng: 90.36, name: "Bangladesh", country: "Bangladesh", iso: "BD", region: "South Asia" },
    GeoEntry { keys: &["sri lanka"], lat: 7.87, lng: 80.77, name: "Sri Lanka", country: "Sri Lanka", iso: "LK", region: "South Asia" },
    GeoEntry { keys: &["pakistan"], lat: 30.38, lng: 69.35, name: "Pakistan", country: "Pakistan", iso: "PK", region: "South Asia" },
    GeoEntry { keys: &["afghanistan"], lat: 33.94, lng: 67.71, name: "Afghanistan", country: "Afghanistan", iso: "AF", region: "South Asia" },
    GeoEntry { keys: &["mexico"], lat: 23.63, lng: -102.55, name: "Mexico", country: "Mexico", iso: "MX", region: "Latin America" },
    GeoEntry { keys: &["brazil"], lat: -14.24, lng: -51.93, name: "Brazil", country: "Brazil", iso: "BR", region: "Latin America" },
    GeoEntry { keys: &["peru"], lat: -9.19, lng: -75.02, name: "Peru", country: "Peru", iso: "PE", region: "Latin America" },
    GeoEntry { keys: &["colombia"], lat: 4.57, lng: -74.3, name: "Colombia", country: "Colombia", iso: "CO", region: "Latin America" },
    GeoEntry { keys: &["ecuador"], lat: -1.83, lng: -78.18, name: "Ecuador", country: "Ecuador", iso: "EC", region: "Latin America" },
    GeoEntry { keys: &["bolivia"], lat: -16.29, lng: -63.59, name: "Bolivia", country: "Bolivia", iso: "BO", region: "Latin America" },
    GeoEntry { keys: &["argentina"], lat: -38.42, lng: -63.62, name: "Argentina", country: "Argentina", iso: "AR", region: "Latin America" },
    GeoEntry { keys: &["chile"], lat: -35.68, lng: -71.54, name: "Chile", country: "Chile", iso: "CL", region: "Latin America" },
    GeoEntry { keys: &["venezuela"], lat: 6.42, lng: -66.59, name: "Venezuela", country: "Venezuela", iso: "VE", region: "Latin America" },
    GeoEntry { keys: &["costa rica"], lat: 9.75, lng: -83.75, name: "Costa Rica", country: "Costa Rica", iso: "CR", region: "Latin America" },
    GeoEntry { keys: &["guatemala"], lat: 15.78, lng: -90.23, name: "Guatemala", country: "Guatemala", iso: "GT", region: "Latin America" },
    GeoEntry { keys: &["honduras"], lat: 15.2, lng: -86.24, name: "Honduras", country: "Honduras", iso: "HN", region: "Latin America" },
    GeoEntry { keys: &["panama"], lat: 8.54, lng: -80.78, name: "Panama", country: "Panama", iso: "PA", region: "Latin America" },
    GeoEntry { keys: &["dominican republic"], lat: 18.74, lng: -70.16, name: "Dominican Republic", country: "Dominican Republic", iso: "DO", region: "Caribbean" },
    GeoEntry { keys: &["haiti"], lat: 18.97, lng: -72.29, name: "Haiti", country: "Haiti", iso: "HT", region: "Caribbean" },
    GeoEntry { keys: &["cuba"], lat: 21.52, lng: -77.78, name: "Cuba", country: "Cuba", iso: "CU", region: "Caribbean" },
    GeoEntry { keys: &["jamaica"], lat: 18.11, lng: -77.3, name: "Jamaica", country: "Jamaica", iso: "JM", region: "Caribbean" },
    GeoEntry { keys: &["kenya"], lat: -0.02, lng: 37.91, name: "Kenya", country: "Kenya", iso: "KE", region: "East Africa" },
    GeoEntry { keys: &["tanzania"], lat: -6.37, lng: 34.89, name: "Tanzania", country: "Tanzania", iso: "TZ", region: "East Africa" },
    GeoEntry { keys: &["uganda"], lat: 1.37, lng: 32.29, name: "Uganda", country: "Uganda", iso: "UG", region: "East Africa" },
    GeoEntry { keys: &["rwanda"], lat: -1.94, lng: 29.87, name: "Rwanda", country: "Rwanda", iso: "RW", region: "East Africa" },
    GeoEntry { keys: &["ethiopia"], lat: 9.15, lng: 40.49, name: "Ethiopia", country: "Ethiopia", iso: "ET", region: "East Africa" },
    GeoEntry { keys: &["south africa"], lat: -30.56, lng: 22.94, name: "South Africa", country: "South Africa", iso: "ZA", region: "Southern Africa" },
    GeoEntry { keys: &["nigeria"], lat: 9.08, lng: 7.49, name: "Nigeria", country: "Nigeria", iso: "NG", region: "West Africa" },
    GeoEntry { keys: &["ghana"], lat: 7.95, lng: -1.02, name: "Ghana", country: "Ghana", iso: "GH", region: "West Africa" },
    GeoEntry { keys: &["senegal"], lat: 14.5, lng: -14.45, name: "Senegal", country: "Senegal", iso: "SN", region: "West Africa" },
    GeoEntry { keys: &["cameroon"], lat: 7.37, lng: 12.35, name: "Cameroon", country: "Cameroon", iso: "CM", region: "West Africa" },
    GeoEntry { keys: &["ivory coast", "cote d'ivoire", "côte d'ivoire"], lat: 7.54, lng: -5.55, name: "Ivory Coast", country: "Ivory Coast", iso: "CI", region: "West Africa" },
    GeoEntry { keys: &["guinea"], lat: 9.95, lng: -9.7, name: "Guinea", country: "Guinea", iso: "GN", region: "West Africa" },
    GeoEntry { keys: &["sierra leone"], lat: 8.46, lng: -11.78, name: "Sierra Leone", country: "Sierra Leone", iso: "SL", region: "West Africa" },
    GeoEntry { keys: &["liberia"], lat: 6.43, lng: -9.43, name: "Liberia", country: "Liberia", iso: "LR", region: "West Africa" },
    GeoEntry { keys: &["mali"], lat: 17.57, lng: -4.0, name: "Mali", country: "Mali", iso: "ML", region: "West Africa" },
    GeoEntry { keys: &["congo", "drc", "democratic republic"], lat: -4.04, lng: 21.76, name: "DRC", country: "DR Congo", iso: "CD", region: "Central Africa" },
    GeoEntry { keys: &["egypt"], lat: 26.82, lng: 30.8, name: "Egypt", country: "Egypt", iso: "EG", region: "North Africa" },
    GeoEntry { keys: &["morocco"], lat: 31.79, lng: -7.09, name: "Morocco", country: "Morocco", iso: "MA", region: "North Africa" },
    GeoEntry { keys: &["sudan"], lat: 12.86, lng: 30.22, name: "Sudan", country: "Sudan", iso: "SD", region: "East Africa" },
    GeoEntry { keys: &["south sudan"], lat: 6.88, lng: 31.31, name: "South Sudan", country: "South Sudan", iso: "SS", region: "East Africa" },
    GeoEntry { keys: &["somalia"], lat: 5.15, lng: 46.2, name: "Somalia", country: "Somalia", iso: "SO", region: "East Africa" },
    GeoEntry { keys: &["chad"], lat: 15.45, lng: 18.73, name: "Chad", country: "Chad", iso: "TD", region: "Central Africa" },
    GeoEntry { keys: &["central african republic", "car"], lat: 6.61, lng: 20.94, name: "CAR", country: "Central African Republic", iso: "CF", region: "Central Africa" },
    GeoEntry { keys: &["angola"], lat: -11.2, lng: 17.87, name: "Angola", country: "Angola", iso: "AO", region: "Southern Africa" },
    GeoEntry { keys: &["mozambique"], lat: -18.67, lng: 35.53, name: "Mozambique", country: "Mozambique", iso: "MZ", region: "Southern Africa" },
    GeoEntry { keys: &["zambia"], lat: -13.13, lng: 27.85, name: "Zambia", country: "Zambia", iso: "ZM", region: "Southern Africa" },
    GeoEntry { keys: &["zimbabwe"], lat: -19.02, lng: 29.15, name: "Zimbabwe", country: "Zimbabwe", iso: "ZW", region: "Southern Africa" },
    GeoEntry { keys: &["malawi"], lat: -13.25, lng: 34.3, name: "Malawi", country: "Malawi", iso: "MW", region: "Southern Africa" },
    GeoEntry { keys: &["madagascar"], lat: -18.77, lng: 46.87, name: "Madagascar", country: "Madagascar", iso: "MG", region: "East Africa" },
    GeoEntry { keys: &["china"], lat: 35.86, lng: 104.2, name: "China", country: "China", iso: "CN", region: "East Asia" },
    GeoEntry { keys: &["japan"], lat: 36.2, lng: 138.25, name: "Japan", country: "Japan", iso: "JP", region: "East Asia" },
    GeoEntry { keys: &["south korea", "korea"], lat: 35.91, lng: 127.77, name: "South Korea", country: "South Korea", iso: "KR", region: "East Asia" },
    GeoEntry { keys: &["australia"], lat: -25.27, lng: 133.78, name: "Australia", country: "Australia", iso: "AU", region: "Oceania" },
    GeoEntry { keys: &["fiji"], lat: -17.71, lng: 178.07, name: "Fiji", country: "Fiji", iso: "FJ", region: "Oceania" },
    GeoEntry { keys: &["turkey"], lat: 38.96, lng: 35.24, name: "Turkey", country: "Turkey", iso: "TR", region: "Middle East" },
    GeoEntry { keys: &["iraq"], lat: 33.22, lng: 43.68, name: "Iraq", country: "Iraq", iso: "IQ", region: "Middle East" },
    GeoEntry { keys: &["yemen"], lat: 15.55, lng: 48.52, name: "Yemen", country: "Yemen", iso: "YE", region: "Middle East" },
    GeoEntry { keys: &["saudi arabia"], lat: 23.89, lng: 45.08, name: "Saudi Arabia", country: "Saudi Arabia", iso: "SA", region: "Middle East" },
    GeoEntry { keys: &["italy"], lat: 41.87, lng: 12.57, name: "Italy", country: "Italy", iso: "IT", region: "Europe" },
    GeoEntry { keys: &["spain"], lat: 40.46, lng: -3.75, name: "Spain", country: "Spain", iso: "ES", region: "Europe" },
    GeoEntry { keys: &["france"], lat: 46.23, lng: 2.21, name: "France", country: "France", iso: "FR", region: "Europe" },
    GeoEntry { keys: &["germany"], lat: 51.17, lng: 10.45, name: "Germany", country: "Germany", iso: "DE", region: "Europe" },
    GeoEntry { keys: &["uk", "united kingdom", "britain", "england"], lat: 55.38, lng: -3.44, name: "UK", country: "United Kingdom", iso: "GB", region: "Europe" },
    GeoEntry { keys: &["greece"], lat: 39.07, lng: 21.82, name: "Greece", country: "Greece", iso: "GR", region: "Europe" },
    GeoEntry { keys: &["portugal"], lat: 39.4, lng: -8.22, name: "Portugal", country: "Portugal", iso: "PT", region: "Europe" },
    GeoEntry { keys: &["mauritania"], lat: 21.01, lng: -10.94, name: "Mauritania", country: "Mauritania", iso: "MR", region: "West Africa" },
];

pub static DISEASES: &[DiseaseEntry] = &[
    DiseaseEntry { term: "nipah", category: "viral", severity: 9, glyph: "🦇" },
    DiseaseEntry { term: "ebola", category: "hemorrhagic", severity: 10, glyph: "🩸" },
    DiseaseEntry { term: "marburg", category: "hemorrhagic", severity: 10, glyph: "🩸" },
    DiseaseEntry { term: "dengue", category: "vector-borne", severity: 6, glyph: "🦟" },
    DiseaseEntry { term: "malaria", category: "vector-borne", severity: 7, glyph: "🦟" },
    DiseaseEntry { term: "cholera", category: "waterborne", severity: 8, glyph: "💧" },
    DiseaseEntry { term: "typhoid", category: "waterborne", severity: 6, glyph: "💧" },
    DiseaseEntry { term: "zika", category: "vector-borne", severity: 5, glyph: "🦟" },
    DiseaseEntry { term: "chikungunya", category: "vector-borne", severity: 5, glyph: "🦟" },
    DiseaseEntry { term: "yellow fever", category: "vector-borne", severity: 8, glyph: "🦟" },
    DiseaseEntry { term: "avian flu", category: "respiratory", severity: 8, glyph: "🐦" },
    DiseaseEntry { term: "h5n1", category: "respiratory", severity: 8, glyph: "🐦" },
    DiseaseEntry { term: "bird flu", category: "respiratory", severity: 8, glyph: "🐦" },
    DiseaseEntry { term: "h5n6", category: "respiratory", severity: 8, glyph: "🐦" },
    DiseaseEntry { term: "mpox", category: "viral", severity: 5, glyph: "🦠" },
    DiseaseEntry { term: "monkeypox", category: "viral", severity: 5, glyph: "🦠" },
    DiseaseEntry { term: "measles", category: "vaccine-preventable", severity: 6, glyph: "💉" },
    DiseaseEntry { term: "diphtheria", category: "vaccine-preventable", severity: 7, glyph: "💉" },
    DiseaseEntry { term: "polio", category: "vaccine-preventable", severity: 9, glyph: "💉" },
    DiseaseEntry { term: "tuberculosis", category: "respiratory", severity: 7, glyph: "🫁" },
    DiseaseEntry { term: "tb ", category: "respiratory", severity: 7, glyph: "🫁" },
    DiseaseEntry { term: "plague", category: "bacterial", severity: 9, glyph: "☠️" },
    DiseaseEntry { term: "anthrax", category: "bacterial", severity: 8, glyph: "☠️" },
    DiseaseEntry { term: "meningitis", category: "bacterial", severity: 7, glyph: "🧠" },
    DiseaseEntry { term: "rift valley fever", category: "vector-borne", severity: 7, glyph: "🦟" },
    DiseaseEntry { term: "lassa fever", category: "hemorrhagic", severity: 8, glyph: "🩸" },
    DiseaseEntry { term: "lassa", category: "hemorrhagic", severity: 8, glyph: "🩸" },
    DiseaseEntry { term: "rabies", category: "viral", severity: 9, glyph: "🐕" },
    DiseaseEntry { term: "hepatitis a", category: "waterborne", severity: 5, glyph: "💧" },
    DiseaseEntry { term: "hepatitis e", category: "waterborne", severity: 5, glyph: "💧" },
    DiseaseEntry { term: "norovirus", category: "waterborne", severity: 4, glyph: "💧" },
    DiseaseEntry { term: "leptospirosis", category: "waterborne", severity: 5, glyph: "💧" },
    DiseaseEntry { term: "schistosomiasis", category: "parasitic", severity: 4, glyph: "🪱" },
    DiseaseEntry { term: "leishmaniasis", category: "parasitic", severity: 5, glyph: "🪱" },
    DiseaseEntry { term: "chagas", category: "parasitic", severity: 6, glyph: "🪱" },
    DiseaseEntry { term: "covid", category: "respiratory", severity: 5, glyph: "🦠" },
    DiseaseEntry { term: "sars", category: "respiratory", severity: 8, glyph: "🦠" },
    DiseaseEntry { term: "mers", category: "respiratory", severity: 8, glyph: "🦠" },
    DiseaseEntry { term: "gastroenteritis", category: "waterborne", severity: 3, glyph: "💧" },
    DiseaseEntry { term: "food poisoning", category: "waterborne", severity: 3, glyph: "💧" },
    DiseaseEntry { term: "diarrhea", category: "waterborne", severity: 3, glyph: "💧" },
    DiseaseEntry { term: "diarrhoea", category: "waterborne", severity: 3, glyph: "💧" },
    DiseaseEntry { term: "fever", category: "unknown", severity: 4, glyph: "🌡️" },
    DiseaseEntry { term: "hiv", category: "viral", severity: 7, glyph: "🔴" },
];

/// Major international hubs per ISO country code, with their declared outbound routes.
pub static AIR_HUBS: &[(&str, &[AirHub])] = &[
    (
        "BD",
        &[
            AirHub { city: "Dhaka", iata: "DAC", lat: 23.81, lng: 90.41, routes: &["DEL", "DXB", "KUL", "SIN", "DOH"] },
        ],
    ),
    (
        "IN",
        &[
            AirHub { city: "Delhi", iata: "DEL", lat: 28.61, lng: 77.21, routes: &["DXB", "LHR", "SIN", "BKK", "JFK"] },
            AirHub { city: "Mumbai", iata: "BOM", lat: 19.07, lng: 72.88, routes: &["DXB", "LHR", "SIN", "DOH", "JFK"] },
        ],
    ),
    (
        "ET",
        &[
            AirHub { city: "Addis Ababa", iata: "ADD", lat: 9.02, lng: 38.75, routes: &["DXB", "JNB", "NBO", "LHR", "CDG"] },
        ],
    ),
    (
        "CD",
        &[
            AirHub { city: "Kinshasa", iata: "FIH", lat: -4.44, lng: 15.27, routes: &["ADD", "NBO", "JNB", "BRU", "CDG"] },
        ],
    ),
    (
        "KH",
        &[
            AirHub { city: "Phnom Penh", iata: "PNH", lat: 11.56, lng: 104.92, routes: &["BKK", "SIN", "ICN", "HKG", "KUL"] },
        ],
    ),
    (
        "TH",
        &[
            AirHub { city: "Bangkok", iata: "BKK", lat: 13.75, lng: 100.5, routes: &["SIN", "HKG", "NRT", "ICN", "LHR"] },
        ],
    ),
    (
        "SN",
        &[
            AirHub { city: "Dakar", iata: "DSS", lat: 14.69, lng: -17.44, routes: &["CDG", "CMN", "ADD", "LIS", "MAD"] },
        ],
    ),
    (
        "NG",
        &[
            AirHub { city: "Lagos", iata: "LOS", lat: 6.52, lng: 3.38, routes: &["LHR", "DXB", "ADD", "JNB", "CDG"] },
        ],
    ),
    (
        "KE",
        &[
            AirHub { city: "Nairobi", iata: "NBO", lat: -1.29, lng: 36.82, routes: &["ADD", "DXB", "LHR", "JNB", "BKK"] },
        ],
    ),
    (
        "BR",
        &[
            AirHub { city: "São Paulo", iata: "GRU", lat: -23.55, lng: -46.63, routes: &["MIA", "JFK", "LHR", "CDG", "EZE"] },
        ],
    ),
    (
        "MX",
        &[
            AirHub { city: "Mexico City", iata: "MEX", lat: 19.43, lng: -99.13, routes: &["LAX", "MIA", "JFK", "MAD", "BOG"] },
        ],
    ),
    (
        "CN",
        &[
            AirHub { city: "Beijing", iata: "PEK", lat: 39.9, lng: 116.41, routes: &["ICN", "NRT", "SIN", "LHR", "JFK"] },
        ],
    ),
    (
        "ZA",
        &[
            AirHub { city: "Johannesburg", iata: "JNB", lat: -26.2, lng: 28.05, routes: &["LHR", "DXB", "ADD", "NBO", "CDG"] },
        ],
    ),
];

pub static AIRPORTS: &[Airport] = &[
    Airport { iata: "DEL", lat: 28.61, lng: 77.21 },
    Airport { iata: "DXB", lat: 25.25, lng: 55.36 },
    Airport { iata: "LHR", lat: 51.47, lng: -0.46 },
    Airport { iata: "SIN", lat: 1.35, lng: 103.99 },
    Airport { iata: "BKK", lat: 13.69, lng: 100.75 },
    Airport { iata: "JFK", lat: 40.64, lng: -73.78 },
    Airport { iata: "CDG", lat: 49.01, lng: 2.55 },
    Airport { iata: "NRT", lat: 35.76, lng: 140.39 },
    Airport { iata: "ICN", lat: 37.46, lng: 126.44 },
    Airport { iata: "HKG", lat: 22.31, lng: 113.92 },
    Airport { iata: "KUL", lat: 2.74, lng: 101.7 },
    Airport { iata: "DOH", lat: 25.26, lng: 51.57 },
    Airport { iata: "NBO", lat: -1.32, lng: 36.93 },
    Airport { iata: "JNB", lat: -26.14, lng: 28.25 },
    Airport { iata: "ADD", lat: 8.98, lng: 38.8 },
    Airport { iata: "BRU", lat: 50.9, lng: 4.48 },
    Airport { iata: "MIA", lat: 25.79, lng: -80.29 },
    Airport { iata: "LAX", lat: 33.94, lng: -118.41 },
    Airport { iata: "MAD", lat: 40.47, lng: -3.57 },
    Airport { iata: "LIS", lat: 38.77, lng: -9.13 },
    Airport { iata: "CMN", lat: 33.37, lng: -7.59 },
    Airport { iata: "GRU", lat: -23.43, lng: -46.47 },
    Airport { iata: "EZE", lat: -34.82, lng: -58.54 },
    Airport { iata: "BOG", lat: 4.7, lng: -74.15 },
    Airport { iata: "PNH", lat: 11.55, lng: 104.84 },
    Airport { iata: "DAC", lat: 23.84, lng: 90.4 },
    Airport { iata: "DSS", lat: 14.74, lng: -17.49 },
    Airport { iata: "LOS", lat: 6.58, lng: 3.32 },
    Airport { iata: "BOM", lat: 19.09, lng: 72.87 },
    Airport { iata: "FIH", lat: -4.39, lng: 15.44 },
    Airport { iata: "MEX", lat: 19.44, lng: -99.07 },
    Airport { iata: "PEK", lat: 40.08, lng: 116.58 },
];

pub fn hubs_for(iso_code: &str) -> &'static [AirHub] {
    AIR_HUBS
        .iter()
        .find(|(iso, _)| *iso == iso_code)
        .map(|(_, hubs)| *hubs)
        .unwrap_or(&[])
}

pub fn airport(iata: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|airport| airport.iata == iata)
}
