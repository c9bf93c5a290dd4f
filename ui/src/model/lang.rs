use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LangCode {
    #[default]
    It,
    En,
    De,
    Fr,
    Sl,
}

impl LangCode {
    pub const ALL: [LangCode; 5] = [LangCode::It, LangCode::En, LangCode::De, LangCode::Fr, LangCode::Sl];

    pub fn as_str(&self) -> &'static str {
        match self {
            LangCode::It => "it",
            LangCode::En => "en",
            LangCode::De => "de",
            LangCode::Fr => "fr",
            LangCode::Sl => "sl",
        }
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LangCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LangCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown language code {s:?}"))
    }
}

/// Labels of every language, as written in each display language.
///
/// The `it` table is mandatory and is used whenever the display language has
/// no table of its own or misses a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Languages {
    tables: BTreeMap<LangCode, BTreeMap<LangCode, String>>,
}

impl Languages {
    pub fn new<I, L>(it: I) -> Self
    where
        I: IntoIterator<Item = (LangCode, L)>,
        L: Into<String>,
    {
        let mut tables = BTreeMap::new();
        tables.insert(LangCode::It, it.into_iter().map(|(c, l)| (c, l.into())).collect());
        Self { tables }
    }

    pub fn with_table<I, L>(mut self, display: LangCode, labels: I) -> Self
    where
        I: IntoIterator<Item = (LangCode, L)>,
        L: Into<String>,
    {
        self.tables
            .insert(display, labels.into_iter().map(|(c, l)| (c, l.into())).collect());
        self
    }

    /// Selectable languages with their labels in `display`, in code order.
    pub fn options(&self, display: LangCode) -> Vec<(LangCode, String)> {
        let fallback = &self.tables[&LangCode::It];
        let table = self.tables.get(&display).unwrap_or(fallback);

        fallback
            .keys()
            .chain(table.keys())
            .copied()
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .filter_map(|code| {
                table
                    .get(&code)
                    .or_else(|| fallback.get(&code))
                    .map(|label| (code, label.clone()))
            })
            .collect()
    }
}
