//! Classification code → display label.

use std::collections::BTreeMap;

const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("not_frail", "Não Frágil"),
    ("pre_frail", "Pré-Frágil"),
    ("frail", "Frágil"),
    ("low_risk", "Baixo Risco"),
    ("moderate_risk", "Risco Moderado"),
    ("high_risk", "Alto Risco"),
    ("ruim", "Ruim"),
    ("regular", "Regular"),
    ("bom", "Bom"),
    ("muito_bom", "Muito Bom"),
    ("excelente", "Excelente"),
    ("normal", "Normal"),
    ("depressao_leve", "Depressão Leve"),
    ("depressao_grave", "Depressão Grave"),
    ("sem_declinio", "Sem Declínio Cognitivo"),
    ("declinio_leve", "Declínio Leve"),
    ("declinio_moderado", "Declínio Moderado"),
    ("declinio_grave", "Declínio Grave"),
    ("alto_risco", "Alto Risco de Queda"),
    ("medio_risco", "Médio Risco de Queda"),
    ("baixo_risco", "Baixo Risco de Queda"),
];

/// Display labels for classification codes, with optional per-clinic
/// overrides taking precedence over the built-in table.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    overrides: BTreeMap<String, String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        Self {
            overrides: overrides.clone(),
        }
    }

    pub fn label(&self, code: &str) -> String {
        if let Some(label) = self.overrides.get(code) {
            return label.clone();
        }
        DEFAULT_LABELS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| fallback_label(code))
    }
}

/// Codes missing from the table render uppercased with every underscore
/// turned into a space.
pub fn fallback_label(code: &str) -> String {
    code.to_uppercase().replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_use_table() {
        let labels = LabelTable::new();
        assert_eq!(labels.label("muito_bom"), "Muito Bom");
        assert_eq!(labels.label("pre_frail"), "Pré-Frágil");
    }

    #[test]
    fn unknown_codes_fall_back() {
        let labels = LabelTable::new();
        assert_eq!(labels.label("risco_muito_alto"), "RISCO MUITO ALTO");
        assert_eq!(labels.label(""), "");
    }

    #[test]
    fn overrides_win() {
        let mut overrides = BTreeMap::new();
        overrides.insert("bom".to_string(), "Adequado".to_string());
        let labels = LabelTable::with_overrides(&overrides);
        assert_eq!(labels.label("bom"), "Adequado");
        assert_eq!(labels.label("ruim"), "Ruim");
    }
}
