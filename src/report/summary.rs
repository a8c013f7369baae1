//! Closing Summary
//! Fixed observations and recommendations printed after the charts.

pub const SUMMARY: &str = "\
Findings:
- A handful of categories are far more popular than the rest (electronics and accessories above all)
- A high rating does not reliably follow from a large discount
- Many products carry a low rating or have almost no reviews

Recommendations:
- Promote well-rated products that have collected few reviews
- Reassess products with deep discounts but poor ratings
- Concentrate sales efforts on the top categories
";
