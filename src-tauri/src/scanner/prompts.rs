//! The fixed instruction sent with every product photo.

/// Build the product analysis prompt.
///
/// The reply is expected to embed one JSON object with these fields;
/// anything around it is stripped by the brace-matching extractor.
pub fn build_scan_prompt() -> String {
    r#"You are a skincare product expert. Analyze this product photo and provide the following information in JSON format:

{
  "name": "Full product name",
  "brand": "Product brand",
  "type": "Product type (e.g. Serum, Moisturizer, Toner, Sunscreen)",
  "description": "Detailed description of what the product does (2-3 sentences)",
  "usageTime": "When to use it (e.g. Morning and night - apply after cleansing)",
  "ingredients": ["List of the main active ingredients"],
  "benefits": ["List of 3-4 main benefits"]
}

If you cannot clearly identify the product, give your best analysis based on what is visible on the packaging."#
        .to_string()
}
