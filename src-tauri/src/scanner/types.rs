use serde::{Deserialize, Serialize};

/// Result of analyzing a product photo.
///
/// Every field is always populated: either from the vision reply or from
/// the fixed placeholder. `identified` is false exactly when the
/// placeholder was substituted, so the UI can tell "could not identify"
/// apart from a real analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub name: String,
    pub brand: String,
    pub product_type: String,
    pub description: String,
    pub usage_time: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub identified: bool,
}

impl ScanResult {
    /// The fixed fallback record substituted whenever the external
    /// analysis fails, for any reason.
    pub fn placeholder() -> Self {
        Self {
            name: "Hyaluronic Acid Hydrating Serum".to_string(),
            brand: "The Ordinary".to_string(),
            product_type: "Serum".to_string(),
            description: "Concentrated hydrating serum with multi-weight hyaluronic acid \
                          for deep hydration and skin plumping."
                .to_string(),
            usage_time: "Morning and night - apply after cleansing, before moisturizer"
                .to_string(),
            ingredients: vec![
                "Hyaluronic Acid".to_string(),
                "Vitamin B5".to_string(),
                "Aqua".to_string(),
            ],
            benefits: vec![
                "Deep hydration".to_string(),
                "Reduces fine lines".to_string(),
                "Improves skin texture".to_string(),
                "Boosts elasticity".to_string(),
            ],
            identified: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_all_fields_populated() {
        let result = ScanResult::placeholder();
        assert!(!result.name.is_empty());
        assert!(!result.brand.is_empty());
        assert!(!result.product_type.is_empty());
        assert!(!result.description.is_empty());
        assert!(!result.usage_time.is_empty());
        assert!(!result.ingredients.is_empty());
        assert!(!result.benefits.is_empty());
        assert!(!result.identified);
    }

    #[test]
    fn test_scan_result_serializes_round_trip() {
        let result = ScanResult::placeholder();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
