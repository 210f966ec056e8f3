//! Embedded flag table.
//!
//! One row per icon in the famfamfam flag set. Country names follow the
//! ISO 3166-1 short names as they were published alongside the icons.
//!
//! Not every ISO code has an icon: AQ, BQ, CW, GG, IM, JE, BL, MF, SX and SS
//! are missing from the set and therefore absent here.

use serde::Serialize;

/// What kind of identifier a flag code is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// ISO 3166-1 alpha-2 country code.
    Country,
    /// Sub-national or supranational marker (England, European Union, ...).
    Region,
    /// Withdrawn ISO code still shipped with the icon set.
    Legacy,
    /// Generic icon not tied to any territory.
    Placeholder,
}

impl FlagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlagKind::Country => "country",
            FlagKind::Region => "region",
            FlagKind::Legacy => "legacy",
            FlagKind::Placeholder => "placeholder",
        }
    }
}

/// A row of the flag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagCode {
    pub code: &'static str,
    pub name: &'static str,
    pub kind: FlagKind,
}

impl FlagCode {
    const fn country(code: &'static str, name: &'static str) -> Self {
        Self { code, name, kind: FlagKind::Country }
    }

    const fn region(code: &'static str, name: &'static str) -> Self {
        Self { code, name, kind: FlagKind::Region }
    }

    const fn legacy(code: &'static str, name: &'static str) -> Self {
        Self { code, name, kind: FlagKind::Legacy }
    }

    const fn placeholder(code: &'static str, name: &'static str) -> Self {
        Self { code, name, kind: FlagKind::Placeholder }
    }
}

/// Code of the generic famfamfam icon.
pub const PLACEHOLDER_CODE: &str = "FAM";

pub const FLAG_CODES: &[FlagCode] = &[
    // =========================================================================
    // ISO 3166-1 alpha-2
    // =========================================================================
    FlagCode::country("AF", "Afghanistan"),
    FlagCode::country("AX", "Åland Islands"),
    FlagCode::country("AL", "Albania"),
    FlagCode::country("DZ", "Algeria"),
    FlagCode::country("AS", "American Samoa"),
    FlagCode::country("AD", "Andorra"),
    FlagCode::country("AO", "Angola"),
    FlagCode::country("AI", "Anguilla"),
    FlagCode::country("AG", "Antigua And Barbuda"),
    FlagCode::country("AR", "Argentina"),
    FlagCode::country("AM", "Armenia"),
    FlagCode::country("AW", "Aruba"),
    FlagCode::country("AU", "Australia"),
    FlagCode::country("AT", "Austria"),
    FlagCode::country("AZ", "Azerbaijan"),
    FlagCode::country("BS", "Bahamas"),
    FlagCode::country("BH", "Bahrain"),
    FlagCode::country("BD", "Bangladesh"),
    FlagCode::country("BB", "Barbados"),
    FlagCode::country("BY", "Belarus"),
    FlagCode::country("BE", "Belgium"),
    FlagCode::country("BZ", "Belize"),
    FlagCode::country("BJ", "Benin"),
    FlagCode::country("BM", "Bermuda"),
    FlagCode::country("BT", "Bhutan"),
    FlagCode::country("BO", "Bolivia, Plurinational State Of"),
    FlagCode::country("BA", "Bosnia And Herzegovina"),
    FlagCode::country("BW", "Botswana"),
    FlagCode::country("BV", "Bouvet Island"),
    FlagCode::country("BR", "Brazil"),
    FlagCode::country("IO", "British Indian Ocean Territory"),
    FlagCode::country("BN", "Brunei Darussalam"),
    FlagCode::country("BG", "Bulgaria"),
    FlagCode::country("BF", "Burkina Faso"),
    FlagCode::country("BI", "Burundi"),
    FlagCode::country("KH", "Cambodia"),
    FlagCode::country("CM", "Cameroon"),
    FlagCode::country("CA", "Canada"),
    FlagCode::country("CV", "Cape Verde"),
    FlagCode::country("KY", "Cayman Islands"),
    FlagCode::country("CF", "Central African Republic"),
    FlagCode::country("TD", "Chad"),
    FlagCode::country("CL", "Chile"),
    FlagCode::country("CN", "China"),
    FlagCode::country("CX", "Christmas Island"),
    FlagCode::country("CC", "Cocos (Keeling) Islands"),
    FlagCode::country("CO", "Colombia"),
    FlagCode::country("KM", "Comoros"),
    FlagCode::country("CG", "Congo"),
    FlagCode::country("CD", "Congo, The Democratic Republic Of The"),
    FlagCode::country("CK", "Cook Islands"),
    FlagCode::country("CR", "Costa Rica"),
    FlagCode::country("CI", "Côte D'ivoire"),
    FlagCode::country("HR", "Croatia"),
    FlagCode::country("CU", "Cuba"),
    FlagCode::country("CY", "Cyprus"),
    FlagCode::country("CZ", "Czech Republic"),
    FlagCode::country("DK", "Denmark"),
    FlagCode::country("DJ", "Djibouti"),
    FlagCode::country("DM", "Dominica"),
    FlagCode::country("DO", "Dominican Republic"),
    FlagCode::country("EC", "Ecuador"),
    FlagCode::country("EG", "Egypt"),
    FlagCode::country("SV", "El Salvador"),
    FlagCode::country("GQ", "Equatorial Guinea"),
    FlagCode::country("ER", "Eritrea"),
    FlagCode::country("EE", "Estonia"),
    FlagCode::country("ET", "Ethiopia"),
    FlagCode::country("FK", "Falkland Islands (Malvinas)"),
    FlagCode::country("FO", "Faroe Islands"),
    FlagCode::country("FJ", "Fiji"),
    FlagCode::country("FI", "Finland"),
    FlagCode::country("FR", "France"),
    FlagCode::country("GF", "French Guiana"),
    FlagCode::country("PF", "French Polynesia"),
    FlagCode::country("TF", "French Southern Territories"),
    FlagCode::country("GA", "Gabon"),
    FlagCode::country("GM", "Gambia"),
    FlagCode::country("GE", "Georgia"),
    FlagCode::country("DE", "Germany"),
    FlagCode::country("GH", "Ghana"),
    FlagCode::country("GI", "Gibraltar"),
    FlagCode::country("GR", "Greece"),
    FlagCode::country("GL", "Greenland"),
    FlagCode::country("GD", "Grenada"),
    FlagCode::country("GP", "Guadeloupe"),
    FlagCode::country("GU", "Guam"),
    FlagCode::country("GT", "Guatemala"),
    FlagCode::country("GN", "Guinea"),
    FlagCode::country("GW", "Guinea-Bissau"),
    FlagCode::country("GY", "Guyana"),
    FlagCode::country("HT", "Haiti"),
    FlagCode::country("HM", "Heard Island And Mcdonald Islands"),
    FlagCode::country("VA", "Holy See (Vatican City State)"),
    FlagCode::country("HN", "Honduras"),
    FlagCode::country("HK", "Hong Kong"),
    FlagCode::country("HU", "Hungary"),
    FlagCode::country("IS", "Iceland"),
    FlagCode::country("IN", "India"),
    FlagCode::country("ID", "Indonesia"),
    FlagCode::country("IR", "Iran, Islamic Republic Of"),
    FlagCode::country("IQ", "Iraq"),
    FlagCode::country("IE", "Ireland"),
    FlagCode::country("IL", "Israel"),
    FlagCode::country("IT", "Italy"),
    FlagCode::country("JM", "Jamaica"),
    FlagCode::country("JP", "Japan"),
    FlagCode::country("JO", "Jordan"),
    FlagCode::country("KZ", "Kazakhstan"),
    FlagCode::country("KE", "Kenya"),
    FlagCode::country("KI", "Kiribati"),
    FlagCode::country("KP", "Korea, Democratic People's Republic Of"),
    FlagCode::country("KR", "Korea, Republic Of"),
    FlagCode::country("KW", "Kuwait"),
    FlagCode::country("KG", "Kyrgyzstan"),
    FlagCode::country("LA", "Lao People's Democratic Republic"),
    FlagCode::country("LV", "Latvia"),
    FlagCode::country("LB", "Lebanon"),
    FlagCode::country("LS", "Lesotho"),
    FlagCode::country("LR", "Liberia"),
    FlagCode::country("LY", "Libya"),
    FlagCode::country("LI", "Liechtenstein"),
    FlagCode::country("LT", "Lithuania"),
    FlagCode::country("LU", "Luxembourg"),
    FlagCode::country("MO", "Macao"),
    FlagCode::country("MK", "Macedonia, The Former Yugoslav Republic Of"),
    FlagCode::country("MG", "Madagascar"),
    FlagCode::country("MW", "Malawi"),
    FlagCode::country("MY", "Malaysia"),
    FlagCode::country("MV", "Maldives"),
    FlagCode::country("ML", "Mali"),
    FlagCode::country("MT", "Malta"),
    FlagCode::country("MH", "Marshall Islands"),
    FlagCode::country("MQ", "Martinique"),
    FlagCode::country("MR", "Mauritania"),
    FlagCode::country("MU", "Mauritius"),
    FlagCode::country("YT", "Mayotte"),
    FlagCode::country("MX", "Mexico"),
    FlagCode::country("FM", "Micronesia, Federated States Of"),
    FlagCode::country("MD", "Moldova, Republic Of"),
    FlagCode::country("MC", "Monaco"),
    FlagCode::country("MN", "Mongolia"),
    FlagCode::country("ME", "Montenegro"),
    FlagCode::country("MS", "Montserrat"),
    FlagCode::country("MA", "Morocco"),
    FlagCode::country("MZ", "Mozambique"),
    FlagCode::country("MM", "Myanmar"),
    FlagCode::country("NA", "Namibia"),
    FlagCode::country("NR", "Nauru"),
    FlagCode::country("NP", "Nepal"),
    FlagCode::country("NL", "Netherlands"),
    FlagCode::country("NC", "New Caledonia"),
    FlagCode::country("NZ", "New Zealand"),
    FlagCode::country("NI", "Nicaragua"),
    FlagCode::country("NE", "Niger"),
    FlagCode::country("NG", "Nigeria"),
    FlagCode::country("NU", "Niue"),
    FlagCode::country("NF", "Norfolk Island"),
    FlagCode::country("MP", "Northern Mariana Islands"),
    FlagCode::country("NO", "Norway"),
    FlagCode::country("OM", "Oman"),
    FlagCode::country("PK", "Pakistan"),
    FlagCode::country("PW", "Palau"),
    FlagCode::country("PS", "Palestine, State Of"),
    FlagCode::country("PA", "Panama"),
    FlagCode::country("PG", "Papua New Guinea"),
    FlagCode::country("PY", "Paraguay"),
    FlagCode::country("PE", "Peru"),
    FlagCode::country("PH", "Philippines"),
    FlagCode::country("PN", "Pitcairn"),
    FlagCode::country("PL", "Poland"),
    FlagCode::country("PT", "Portugal"),
    FlagCode::country("PR", "Puerto Rico"),
    FlagCode::country("QA", "Qatar"),
    FlagCode::country("RE", "Réunion"),
    FlagCode::country("RO", "Romania"),
    FlagCode::country("RU", "Russian Federation"),
    FlagCode::country("RW", "Rwanda"),
    FlagCode::country("SH", "Saint Helena, Ascension And Tristan Da Cunha"),
    FlagCode::country("KN", "Saint Kitts And Nevis"),
    FlagCode::country("LC", "Saint Lucia"),
    FlagCode::country("PM", "Saint Pierre And Miquelon"),
    FlagCode::country("VC", "Saint Vincent And The Grenadines"),
    FlagCode::country("WS", "Samoa"),
    FlagCode::country("SM", "San Marino"),
    FlagCode::country("ST", "Sao Tome And Principe"),
    FlagCode::country("SA", "Saudi Arabia"),
    FlagCode::country("SN", "Senegal"),
    FlagCode::country("RS", "Serbia"),
    FlagCode::country("SC", "Seychelles"),
    FlagCode::country("SL", "Sierra Leone"),
    FlagCode::country("SG", "Singapore"),
    FlagCode::country("SK", "Slovakia"),
    FlagCode::country("SI", "Slovenia"),
    FlagCode::country("SB", "Solomon Islands"),
    FlagCode::country("SO", "Somalia"),
    FlagCode::country("ZA", "South Africa"),
    FlagCode::country("GS", "South Georgia And The South Sandwich Islands"),
    FlagCode::country("ES", "Spain"),
    FlagCode::country("LK", "Sri Lanka"),
    FlagCode::country("SD", "Sudan"),
    FlagCode::country("SR", "Suriname"),
    FlagCode::country("SJ", "Svalbard And Jan Mayen"),
    FlagCode::country("SZ", "Swaziland"),
    FlagCode::country("SE", "Sweden"),
    FlagCode::country("CH", "Switzerland"),
    FlagCode::country("SY", "Syrian Arab Republic"),
    FlagCode::country("TW", "Taiwan, Province Of China"),
    FlagCode::country("TJ", "Tajikistan"),
    FlagCode::country("TZ", "Tanzania, United Republic Of"),
    FlagCode::country("TH", "Thailand"),
    FlagCode::country("TL", "Timor-Leste"),
    FlagCode::country("TG", "Togo"),
    FlagCode::country("TK", "Tokelau"),
    FlagCode::country("TO", "Tonga"),
    FlagCode::country("TT", "Trinidad And Tobago"),
    FlagCode::country("TN", "Tunisia"),
    FlagCode::country("TR", "Turkey"),
    FlagCode::country("TM", "Turkmenistan"),
    FlagCode::country("TC", "Turks And Caicos Islands"),
    FlagCode::country("TV", "Tuvalu"),
    FlagCode::country("UG", "Uganda"),
    FlagCode::country("UA", "Ukraine"),
    FlagCode::country("AE", "United Arab Emirates"),
    FlagCode::country("GB", "United Kingdom"),
    FlagCode::country("US", "United States"),
    FlagCode::country("UM", "United States Minor Outlying Islands"),
    FlagCode::country("UY", "Uruguay"),
    FlagCode::country("UZ", "Uzbekistan"),
    FlagCode::country("VU", "Vanuatu"),
    FlagCode::country("VE", "Venezuela, Bolivarian Republic Of"),
    FlagCode::country("VN", "Viet Nam"),
    FlagCode::country("VG", "Virgin Islands, British"),
    FlagCode::country("VI", "Virgin Islands, U.s."),
    FlagCode::country("WF", "Wallis And Futuna"),
    FlagCode::country("EH", "Western Sahara"),
    FlagCode::country("YE", "Yemen"),
    FlagCode::country("ZM", "Zambia"),
    FlagCode::country("ZW", "Zimbabwe"),

    // =========================================================================
    // Withdrawn ISO codes
    // =========================================================================
    FlagCode::legacy("AN", "Netherlands Antilles"),
    FlagCode::legacy("CS", "Serbia And Montenegro"),

    // =========================================================================
    // Regions
    // =========================================================================
    FlagCode::region("CATALONIA", "Catalonia"),
    FlagCode::region("ENGLAND", "England"),
    FlagCode::region("EUROPEANUNION", "European Union"),
    FlagCode::region("SCOTLAND", "Scotland"),
    FlagCode::region("WALES", "Wales"),

    // =========================================================================
    // Placeholder
    // =========================================================================
    FlagCode::placeholder(PLACEHOLDER_CODE, "FAMFAMFAM"),
];
