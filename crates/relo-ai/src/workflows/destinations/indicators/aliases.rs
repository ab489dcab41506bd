use std::collections::HashMap;
use std::sync::OnceLock;

static LOCALIZED_NAME_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();
static ENGLISH_NAME_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

pub(crate) fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Resolve a country name to its ISO3 code: localized aliases first, then
/// English common names. Both tables are many-to-one.
pub(crate) fn code_for_name(name: &str) -> Option<&'static str> {
    let normalized = normalize_name(name);
    localized_name_map()
        .get(&normalized)
        .or_else(|| english_name_map().get(&normalized))
        .copied()
}

fn localized_name_map() -> &'static HashMap<String, &'static str> {
    LOCALIZED_NAME_MAP.get_or_init(|| {
        const NAME_TO_CODE: &[(&str, &str)] = &[
            ("호주", "AUS"),
            ("오스트레일리아", "AUS"),
            ("오스트리아", "AUT"),
            ("벨기에", "BEL"),
            ("캐나다", "CAN"),
            ("스위스", "CHE"),
            ("칠레", "CHL"),
            ("콜롬비아", "COL"),
            ("코스타리카", "CRI"),
            ("체코", "CZE"),
            ("독일", "DEU"),
            ("덴마크", "DNK"),
            ("스페인", "ESP"),
            ("에스토니아", "EST"),
            ("핀란드", "FIN"),
            ("프랑스", "FRA"),
            ("영국", "GBR"),
            ("그리스", "GRC"),
            ("헝가리", "HUN"),
            ("아일랜드", "IRL"),
            ("아이슬란드", "ISL"),
            ("이스라엘", "ISR"),
            ("이탈리아", "ITA"),
            ("일본", "JPN"),
            ("한국", "KOR"),
            ("대한민국", "KOR"),
            ("리투아니아", "LTU"),
            ("룩셈부르크", "LUX"),
            ("라트비아", "LVA"),
            ("멕시코", "MEX"),
            ("네덜란드", "NLD"),
            ("노르웨이", "NOR"),
            ("뉴질랜드", "NZL"),
            ("폴란드", "POL"),
            ("포르투갈", "PRT"),
            ("슬로바키아", "SVK"),
            ("슬로베니아", "SVN"),
            ("스웨덴", "SWE"),
            ("튀르키예", "TUR"),
            ("터키", "TUR"),
            ("미국", "USA"),
            ("남아프리카공화국", "ZAF"),
            ("남아공", "ZAF"),
        ];

        build_map(NAME_TO_CODE)
    })
}

fn english_name_map() -> &'static HashMap<String, &'static str> {
    ENGLISH_NAME_MAP.get_or_init(|| {
        const NAME_TO_CODE: &[(&str, &str)] = &[
            ("Australia", "AUS"),
            ("Austria", "AUT"),
            ("Belgium", "BEL"),
            ("Canada", "CAN"),
            ("Switzerland", "CHE"),
            ("Chile", "CHL"),
            ("Colombia", "COL"),
            ("Costa Rica", "CRI"),
            ("Czechia", "CZE"),
            ("Czech Republic", "CZE"),
            ("Germany", "DEU"),
            ("Denmark", "DNK"),
            ("Spain", "ESP"),
            ("Estonia", "EST"),
            ("Finland", "FIN"),
            ("France", "FRA"),
            ("United Kingdom", "GBR"),
            ("Great Britain", "GBR"),
            ("Greece", "GRC"),
            ("Hungary", "HUN"),
            ("Ireland", "IRL"),
            ("Iceland", "ISL"),
            ("Israel", "ISR"),
            ("Italy", "ITA"),
            ("Japan", "JPN"),
            ("South Korea", "KOR"),
            ("Korea", "KOR"),
            ("Republic of Korea", "KOR"),
            ("Korea, Republic of", "KOR"),
            ("Lithuania", "LTU"),
            ("Luxembourg", "LUX"),
            ("Latvia", "LVA"),
            ("Mexico", "MEX"),
            ("Netherlands", "NLD"),
            ("Holland", "NLD"),
            ("Norway", "NOR"),
            ("New Zealand", "NZL"),
            ("Poland", "POL"),
            ("Portugal", "PRT"),
            ("Slovakia", "SVK"),
            ("Slovak Republic", "SVK"),
            ("Slovenia", "SVN"),
            ("Sweden", "SWE"),
            ("Turkiye", "TUR"),
            ("T\u{fc}rkiye", "TUR"),
            ("Turkey", "TUR"),
            ("United States", "USA"),
            ("United States of America", "USA"),
            ("South Africa", "ZAF"),
        ];

        build_map(NAME_TO_CODE)
    })
}

fn build_map(entries: &[(&'static str, &'static str)]) -> HashMap<String, &'static str> {
    let mut map = HashMap::with_capacity(entries.len());
    for (name, code) in entries {
        map.insert(normalize_name(name), *code);
    }
    map
}
