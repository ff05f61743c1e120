// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 3166-1 country table.
//!
//! Short names, official names and common names follow the Debian
//! `iso-codes` data set, so a lookup behaves the same way the usual
//! reference packages do. Note that the short name is frequently *not* the
//! everyday name: `"Venezuela, Bolivarian Republic of"`, `"Korea, Republic
//! of"`, `"Viet Nam"`. The common name is only a lookup key.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iso3166Entry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
    pub name: &'static str,
    pub official_name: Option<&'static str>,
    pub common_name: Option<&'static str>,
}

impl Iso3166Entry {
    const fn new(
        alpha2: &'static str,
        alpha3: &'static str,
        numeric: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            alpha2,
            alpha3,
            numeric,
            name,
            official_name: None,
            common_name: None,
        }
    }

    const fn official(self, official_name: &'static str) -> Self {
        Self {
            official_name: Some(official_name),
            ..self
        }
    }

    const fn common(self, common_name: &'static str) -> Self {
        Self {
            common_name: Some(common_name),
            ..self
        }
    }

    /// Every string a lookup may match against.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        [
            Some(self.alpha2),
            Some(self.alpha3),
            Some(self.numeric),
            Some(self.name),
            self.official_name,
            self.common_name,
        ]
        .into_iter()
        .flatten()
    }
}

const fn c(alpha2: &'static str, alpha3: &'static str, numeric: &'static str, name: &'static str) -> Iso3166Entry {
    Iso3166Entry::new(alpha2, alpha3, numeric, name)
}

pub const COUNTRIES: &[Iso3166Entry] = &[
    c("AW", "ABW", "533", "Aruba"),
    c("AF", "AFG", "004", "Afghanistan").official("Islamic Republic of Afghanistan"),
    c("AO", "AGO", "024", "Angola").official("Republic of Angola"),
    c("AI", "AIA", "660", "Anguilla"),
    c("AX", "ALA", "248", "Åland Islands"),
    c("AL", "ALB", "008", "Albania").official("Republic of Albania"),
    c("AD", "AND", "020", "Andorra").official("Principality of Andorra"),
    c("AE", "ARE", "784", "United Arab Emirates"),
    c("AR", "ARG", "032", "Argentina").official("Argentine Republic"),
    c("AM", "ARM", "051", "Armenia").official("Republic of Armenia"),
    c("AS", "ASM", "016", "American Samoa"),
    c("AQ", "ATA", "010", "Antarctica"),
    c("TF", "ATF", "260", "French Southern Territories"),
    c("AG", "ATG", "028", "Antigua and Barbuda"),
    c("AU", "AUS", "036", "Australia"),
    c("AT", "AUT", "040", "Austria").official("Republic of Austria"),
    c("AZ", "AZE", "031", "Azerbaijan").official("Republic of Azerbaijan"),
    c("BI", "BDI", "108", "Burundi").official("Republic of Burundi"),
    c("BE", "BEL", "056", "Belgium").official("Kingdom of Belgium"),
    c("BJ", "BEN", "204", "Benin").official("Republic of Benin"),
    c("BQ", "BES", "535", "Bonaire, Sint Eustatius and Saba").official("Bonaire, Sint Eustatius and Saba"),
    c("BF", "BFA", "854", "Burkina Faso"),
    c("BD", "BGD", "050", "Bangladesh").official("People's Republic of Bangladesh"),
    c("BG", "BGR", "100", "Bulgaria").official("Republic of Bulgaria"),
    c("BH", "BHR", "048", "Bahrain").official("Kingdom of Bahrain"),
    c("BS", "BHS", "044", "Bahamas").official("Commonwealth of the Bahamas"),
    c("BA", "BIH", "070", "Bosnia and Herzegovina").official("Republic of Bosnia and Herzegovina"),
    c("BL", "BLM", "652", "Saint Barthélemy"),
    c("BY", "BLR", "112", "Belarus").official("Republic of Belarus"),
    c("BZ", "BLZ", "084", "Belize"),
    c("BM", "BMU", "060", "Bermuda"),
    c("BO", "BOL", "068", "Bolivia, Plurinational State of")
        .official("Plurinational State of Bolivia")
        .common("Bolivia"),
    c("BR", "BRA", "076", "Brazil").official("Federative Republic of Brazil"),
    c("BB", "BRB", "052", "Barbados"),
    c("BN", "BRN", "096", "Brunei Darussalam"),
    c("BT", "BTN", "064", "Bhutan").official("Kingdom of Bhutan"),
    c("BV", "BVT", "074", "Bouvet Island"),
    c("BW", "BWA", "072", "Botswana").official("Republic of Botswana"),
    c("CF", "CAF", "140", "Central African Republic"),
    c("CA", "CAN", "124", "Canada"),
    c("CC", "CCK", "166", "Cocos (Keeling) Islands"),
    c("CH", "CHE", "756", "Switzerland").official("Swiss Confederation"),
    c("CL", "CHL", "152", "Chile").official("Republic of Chile"),
    c("CN", "CHN", "156", "China").official("People's Republic of China"),
    c("CI", "CIV", "384", "Côte d'Ivoire").official("Republic of Côte d'Ivoire"),
    c("CM", "CMR", "120", "Cameroon").official("Republic of Cameroon"),
    c("CD", "COD", "180", "Congo, The Democratic Republic of the"),
    c("CG", "COG", "178", "Congo").official("Republic of the Congo"),
    c("CK", "COK", "184", "Cook Islands"),
    c("CO", "COL", "170", "Colombia").official("Republic of Colombia"),
    c("KM", "COM", "174", "Comoros").official("Union of the Comoros"),
    c("CV", "CPV", "132", "Cabo Verde").official("Republic of Cabo Verde"),
    c("CR", "CRI", "188", "Costa Rica").official("Republic of Costa Rica"),
    c("CU", "CUB", "192", "Cuba").official("Republic of Cuba"),
    c("CW", "CUW", "531", "Curaçao").official("Curaçao"),
    c("CX", "CXR", "162", "Christmas Island"),
    c("KY", "CYM", "136", "Cayman Islands"),
    c("CY", "CYP", "196", "Cyprus").official("Republic of Cyprus"),
    c("CZ", "CZE", "203", "Czechia").official("Czech Republic"),
    c("DE", "DEU", "276", "Germany").official("Federal Republic of Germany"),
    c("DJ", "DJI", "262", "Djibouti").official("Republic of Djibouti"),
    c("DM", "DMA", "212", "Dominica"),
    c("DK", "DNK", "208", "Denmark").official("Kingdom of Denmark"),
    c("DO", "DOM", "214", "Dominican Republic"),
    c("DZ", "DZA", "012", "Algeria").official("People's Democratic Republic of Algeria"),
    c("EC", "ECU", "218", "Ecuador").official("Republic of Ecuador"),
    c("EG", "EGY", "818", "Egypt").official("Arab Republic of Egypt"),
    c("ER", "ERI", "232", "Eritrea").official("the State of Eritrea"),
    c("EH", "ESH", "732", "Western Sahara"),
    c("ES", "ESP", "724", "Spain").official("Kingdom of Spain"),
    c("EE", "EST", "233", "Estonia").official("Republic of Estonia"),
    c("ET", "ETH", "231", "Ethiopia").official("Federal Democratic Republic of Ethiopia"),
    c("FI", "FIN", "246", "Finland").official("Republic of Finland"),
    c("FJ", "FJI", "242", "Fiji").official("Republic of Fiji"),
    c("FK", "FLK", "238", "Falkland Islands (Malvinas)"),
    c("FR", "FRA", "250", "France").official("French Republic"),
    c("FO", "FRO", "234", "Faroe Islands"),
    c("FM", "FSM", "583", "Micronesia, Federated States of").official("Federated States of Micronesia"),
    c("GA", "GAB", "266", "Gabon").official("Gabonese Republic"),
    c("GB", "GBR", "826", "United Kingdom").official("United Kingdom of Great Britain and Northern Ireland"),
    c("GE", "GEO", "268", "Georgia"),
    c("GG", "GGY", "831", "Guernsey"),
    c("GH", "GHA", "288", "Ghana").official("Republic of Ghana"),
    c("GI", "GIB", "292", "Gibraltar"),
    c("GN", "GIN", "324", "Guinea").official("Republic of Guinea"),
    c("GP", "GLP", "312", "Guadeloupe"),
    c("GM", "GMB", "270", "Gambia").official("Republic of the Gambia"),
    c("GW", "GNB", "624", "Guinea-Bissau").official("Republic of Guinea-Bissau"),
    c("GQ", "GNQ", "226", "Equatorial Guinea").official("Republic of Equatorial Guinea"),
    c("GR", "GRC", "300", "Greece").official("Hellenic Republic"),
    c("GD", "GRD", "308", "Grenada"),
    c("GL", "GRL", "304", "Greenland"),
    c("GT", "GTM", "320", "Guatemala").official("Republic of Guatemala"),
    c("GF", "GUF", "254", "French Guiana"),
    c("GU", "GUM", "316", "Guam"),
    c("GY", "GUY", "328", "Guyana").official("Republic of Guyana"),
    c("HK", "HKG", "344", "Hong Kong").official("Hong Kong Special Administrative Region of China"),
    c("HM", "HMD", "334", "Heard Island and McDonald Islands"),
    c("HN", "HND", "340", "Honduras").official("Republic of Honduras"),
    c("HR", "HRV", "191", "Croatia").official("Republic of Croatia"),
    c("HT", "HTI", "332", "Haiti").official("Republic of Haiti"),
    c("HU", "HUN", "348", "Hungary").official("Hungary"),
    c("ID", "IDN", "360", "Indonesia").official("Republic of Indonesia"),
    c("IM", "IMN", "833", "Isle of Man"),
    c("IN", "IND", "356", "India").official("Republic of India"),
    c("IO", "IOT", "086", "British Indian Ocean Territory"),
    c("IE", "IRL", "372", "Ireland"),
    c("IR", "IRN", "364", "Iran, Islamic Republic of")
        .official("Islamic Republic of Iran")
        .common("Iran"),
    c("IQ", "IRQ", "368", "Iraq").official("Republic of Iraq"),
    c("IS", "ISL", "352", "Iceland").official("Republic of Iceland"),
    c("IL", "ISR", "376", "Israel").official("State of Israel"),
    c("IT", "ITA", "380", "Italy").official("Italian Republic"),
    c("JM", "JAM", "388", "Jamaica"),
    c("JE", "JEY", "832", "Jersey"),
    c("JO", "JOR", "400", "Jordan").official("Hashemite Kingdom of Jordan"),
    c("JP", "JPN", "392", "Japan"),
    c("KZ", "KAZ", "398", "Kazakhstan").official("Republic of Kazakhstan"),
    c("KE", "KEN", "404", "Kenya").official("Republic of Kenya"),
    c("KG", "KGZ", "417", "Kyrgyzstan").official("Kyrgyz Republic"),
    c("KH", "KHM", "116", "Cambodia").official("Kingdom of Cambodia"),
    c("KI", "KIR", "296", "Kiribati").official("Republic of Kiribati"),
    c("KN", "KNA", "659", "Saint Kitts and Nevis"),
    c("KR", "KOR", "410", "Korea, Republic of").common("South Korea"),
    c("KW", "KWT", "414", "Kuwait").official("State of Kuwait"),
    c("LA", "LAO", "418", "Lao People's Democratic Republic").common("Laos"),
    c("LB", "LBN", "422", "Lebanon").official("Lebanese Republic"),
    c("LR", "LBR", "430", "Liberia").official("Republic of Liberia"),
    c("LY", "LBY", "434", "Libya").official("Libya"),
    c("LC", "LCA", "662", "Saint Lucia"),
    c("LI", "LIE", "438", "Liechtenstein").official("Principality of Liechtenstein"),
    c("LK", "LKA", "144", "Sri Lanka").official("Democratic Socialist Republic of Sri Lanka"),
    c("LS", "LSO", "426", "Lesotho").official("Kingdom of Lesotho"),
    c("LT", "LTU", "440", "Lithuania").official("Republic of Lithuania"),
    c("LU", "LUX", "442", "Luxembourg").official("Grand Duchy of Luxembourg"),
    c("LV", "LVA", "428", "Latvia").official("Republic of Latvia"),
    c("MO", "MAC", "446", "Macao").official("Macao Special Administrative Region of China"),
    c("MF", "MAF", "663", "Saint Martin (French part)"),
    c("MA", "MAR", "504", "Morocco").official("Kingdom of Morocco"),
    c("MC", "MCO", "492", "Monaco").official("Principality of Monaco"),
    c("MD", "MDA", "498", "Moldova, Republic of")
        .official("Republic of Moldova")
        .common("Moldova"),
    c("MG", "MDG", "450", "Madagascar").official("Republic of Madagascar"),
    c("MV", "MDV", "462", "Maldives").official("Republic of Maldives"),
    c("MX", "MEX", "484", "Mexico").official("United Mexican States"),
    c("MH", "MHL", "584", "Marshall Islands").official("Republic of the Marshall Islands"),
    c("MK", "MKD", "807", "North Macedonia").official("Republic of North Macedonia"),
    c("ML", "MLI", "466", "Mali").official("Republic of Mali"),
    c("MT", "MLT", "470", "Malta").official("Republic of Malta"),
    c("MM", "MMR", "104", "Myanmar").official("Republic of Myanmar"),
    c("ME", "MNE", "499", "Montenegro").official("Montenegro"),
    c("MN", "MNG", "496", "Mongolia"),
    c("MP", "MNP", "580", "Northern Mariana Islands").official("Commonwealth of the Northern Mariana Islands"),
    c("MZ", "MOZ", "508", "Mozambique").official("Republic of Mozambique"),
    c("MR", "MRT", "478", "Mauritania").official("Islamic Republic of Mauritania"),
    c("MS", "MSR", "500", "Montserrat"),
    c("MQ", "MTQ", "474", "Martinique"),
    c("MU", "MUS", "480", "Mauritius").official("Republic of Mauritius"),
    c("MW", "MWI", "454", "Malawi").official("Republic of Malawi"),
    c("MY", "MYS", "458", "Malaysia"),
    c("YT", "MYT", "175", "Mayotte"),
    c("NA", "NAM", "516", "Namibia").official("Republic of Namibia"),
    c("NC", "NCL", "540", "New Caledonia"),
    c("NE", "NER", "562", "Niger").official("Republic of the Niger"),
    c("NF", "NFK", "574", "Norfolk Island"),
    c("NG", "NGA", "566", "Nigeria").official("Federal Republic of Nigeria"),
    c("NI", "NIC", "558", "Nicaragua").official("Republic of Nicaragua"),
    c("NU", "NIU", "570", "Niue").official("Niue"),
    c("NL", "NLD", "528", "Netherlands").official("Kingdom of the Netherlands"),
    c("NO", "NOR", "578", "Norway").official("Kingdom of Norway"),
    c("NP", "NPL", "524", "Nepal").official("Federal Democratic Republic of Nepal"),
    c("NR", "NRU", "520", "Nauru").official("Republic of Nauru"),
    c("NZ", "NZL", "554", "New Zealand"),
    c("OM", "OMN", "512", "Oman").official("Sultanate of Oman"),
    c("PK", "PAK", "586", "Pakistan").official("Islamic Republic of Pakistan"),
    c("PA", "PAN", "591", "Panama").official("Republic of Panama"),
    c("PN", "PCN", "612", "Pitcairn"),
    c("PE", "PER", "604", "Peru").official("Republic of Peru"),
    c("PH", "PHL", "608", "Philippines").official("Republic of the Philippines"),
    c("PW", "PLW", "585", "Palau").official("Republic of Palau"),
    c("PG", "PNG", "598", "Papua New Guinea").official("Independent State of Papua New Guinea"),
    c("PL", "POL", "616", "Poland").official("Republic of Poland"),
    c("PR", "PRI", "630", "Puerto Rico"),
    c("KP", "PRK", "408", "Korea, Democratic People's Republic of")
        .official("Democratic People's Republic of Korea")
        .common("North Korea"),
    c("PT", "PRT", "620", "Portugal").official("Portuguese Republic"),
    c("PY", "PRY", "600", "Paraguay").official("Republic of Paraguay"),
    c("PS", "PSE", "275", "Palestine, State of").official("the State of Palestine"),
    c("PF", "PYF", "258", "French Polynesia"),
    c("QA", "QAT", "634", "Qatar").official("State of Qatar"),
    c("RE", "REU", "638", "Réunion"),
    c("RO", "ROU", "642", "Romania"),
    c("RU", "RUS", "643", "Russian Federation"),
    c("RW", "RWA", "646", "Rwanda").official("Rwandese Republic"),
    c("SA", "SAU", "682", "Saudi Arabia").official("Kingdom of Saudi Arabia"),
    c("SD", "SDN", "729", "Sudan").official("Republic of the Sudan"),
    c("SN", "SEN", "686", "Senegal").official("Republic of Senegal"),
    c("SG", "SGP", "702", "Singapore").official("Republic of Singapore"),
    c("GS", "SGS", "239", "South Georgia and the South Sandwich Islands"),
    c("SH", "SHN", "654", "Saint Helena, Ascension and Tristan da Cunha"),
    c("SJ", "SJM", "744", "Svalbard and Jan Mayen"),
    c("SB", "SLB", "090", "Solomon Islands"),
    c("SL", "SLE", "694", "Sierra Leone").official("Republic of Sierra Leone"),
    c("SV", "SLV", "222", "El Salvador").official("Republic of El Salvador"),
    c("SM", "SMR", "674", "San Marino").official("Republic of San Marino"),
    c("SO", "SOM", "706", "Somalia").official("Federal Republic of Somalia"),
    c("PM", "SPM", "666", "Saint Pierre and Miquelon"),
    c("RS", "SRB", "688", "Serbia").official("Republic of Serbia"),
    c("SS", "SSD", "728", "South Sudan").official("Republic of South Sudan"),
    c("ST", "STP", "678", "Sao Tome and Principe").official("Democratic Republic of Sao Tome and Principe"),
    c("SR", "SUR", "740", "Suriname").official("Republic of Suriname"),
    c("SK", "SVK", "703", "Slovakia").official("Slovak Republic"),
    c("SI", "SVN", "705", "Slovenia").official("Republic of Slovenia"),
    c("SE", "SWE", "752", "Sweden").official("Kingdom of Sweden"),
    c("SZ", "SWZ", "748", "Eswatini").official("Kingdom of Eswatini"),
    c("SX", "SXM", "534", "Sint Maarten (Dutch part)").official("Sint Maarten (Dutch part)"),
    c("SC", "SYC", "690", "Seychelles").official("Republic of Seychelles"),
    c("SY", "SYR", "760", "Syrian Arab Republic").common("Syria"),
    c("TC", "TCA", "796", "Turks and Caicos Islands"),
    c("TD", "TCD", "148", "Chad").official("Republic of Chad"),
    c("TG", "TGO", "768", "Togo").official("Togolese Republic"),
    c("TH", "THA", "764", "Thailand").official("Kingdom of Thailand"),
    c("TJ", "TJK", "762", "Tajikistan").official("Republic of Tajikistan"),
    c("TK", "TKL", "772", "Tokelau"),
    c("TM", "TKM", "795", "Turkmenistan"),
    c("TL", "TLS", "626", "Timor-Leste").official("Democratic Republic of Timor-Leste"),
    c("TO", "TON", "776", "Tonga").official("Kingdom of Tonga"),
    c("TT", "TTO", "780", "Trinidad and Tobago").official("Republic of Trinidad and Tobago"),
    c("TN", "TUN", "788", "Tunisia").official("Republic of Tunisia"),
    c("TR", "TUR", "792", "Türkiye").official("Republic of Türkiye"),
    c("TV", "TUV", "798", "Tuvalu"),
    c("TW", "TWN", "158", "Taiwan, Province of China")
        .official("Taiwan, Province of China")
        .common("Taiwan"),
    c("TZ", "TZA", "834", "Tanzania, United Republic of")
        .official("United Republic of Tanzania")
        .common("Tanzania"),
    c("UG", "UGA", "800", "Uganda").official("Republic of Uganda"),
    c("UA", "UKR", "804", "Ukraine"),
    c("UM", "UMI", "581", "United States Minor Outlying Islands"),
    c("UY", "URY", "858", "Uruguay").official("Eastern Republic of Uruguay"),
    c("US", "USA", "840", "United States").official("United States of America"),
    c("UZ", "UZB", "860", "Uzbekistan").official("Republic of Uzbekistan"),
    c("VA", "VAT", "336", "Holy See (Vatican City State)"),
    c("VC", "VCT", "670", "Saint Vincent and the Grenadines"),
    c("VE", "VEN", "862", "Venezuela, Bolivarian Republic of")
        .official("Bolivarian Republic of Venezuela")
        .common("Venezuela"),
    c("VG", "VGB", "092", "Virgin Islands, British").official("British Virgin Islands"),
    c("VI", "VIR", "850", "Virgin Islands, U.S.").official("Virgin Islands of the United States"),
    c("VN", "VNM", "704", "Viet Nam")
        .official("Socialist Republic of Viet Nam")
        .common("Vietnam"),
    c("VU", "VUT", "548", "Vanuatu").official("Republic of Vanuatu"),
    c("WF", "WLF", "876", "Wallis and Futuna"),
    c("WS", "WSM", "882", "Samoa").official("Independent State of Samoa"),
    c("YE", "YEM", "887", "Yemen").official("Republic of Yemen"),
    c("ZA", "ZAF", "710", "South Africa").official("Republic of South Africa"),
    c("ZM", "ZMB", "894", "Zambia").official("Republic of Zambia"),
    c("ZW", "ZWE", "716", "Zimbabwe").official("Republic of Zimbabwe"),
];
