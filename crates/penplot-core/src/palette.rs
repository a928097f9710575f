//! Built-in categorical color cycles. Hex values match d3-scale-chromatic's
//! `schemeCategory10` and `schemeTableau10`, which the plugin UI exposes as
//! its stock schemes.

/// Default cycle for bar, line and pie charts.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Default cycle for radar charts.
pub const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];
