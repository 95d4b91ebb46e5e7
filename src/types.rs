use tabled::Tabled;

/// One identifier conversion, as printed by `wirecase snake` / `wirecase hump`.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct KeyRow {
    pub input: String,
    pub output: String,
}
