//! User-facing strings, kept in one place so wording stays consistent.

pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,

    // File intake
    pub intake_heading: &'static str,
    pub intake_drop_hint: &'static str,
    pub intake_drop_active: &'static str,
    pub intake_columns_hint: &'static str,
    pub intake_path_hint: &'static str,
    pub intake_open_button: &'static str,
    pub intake_remove_button: &'static str,
    pub intake_rejected_title: &'static str,

    // Prediction
    pub predict_heading: &'static str,
    pub predict_explainer_prefix: &'static str,
    pub predict_explainer_suffix: &'static str,
    pub predict_button: &'static str,
    pub predict_button_busy: &'static str,
    pub upload_button: &'static str,
    pub upload_pending: &'static str,

    // Model info
    pub model_heading: &'static str,
    pub model_refresh_button: &'static str,
    pub model_loading: &'static str,

    // Layers
    pub layers_heading: &'static str,

    // Guide
    pub guide_heading: &'static str,
    pub guide_steps: [&'static str; 3],

    // Central panel
    pub error_heading: &'static str,
    pub loading_heading: &'static str,
    pub loading_detail: &'static str,
    pub empty_heading: &'static str,
    pub empty_detail: &'static str,
    pub headline_label: &'static str,
    pub headline_predicted_label: &'static str,
    pub headline_last_label: &'static str,
    pub headline_change_label: &'static str,

    // Stats grid
    pub stat_records_title: &'static str,
    pub stat_records_detail: &'static str,
    pub stat_horizon_title: &'static str,
    pub stat_horizon_detail: &'static str,
    pub stat_steps_title: &'static str,
    pub stat_steps_detail: &'static str,

    // Plot
    pub plot_title: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub label_actual: &'static str,
    pub label_forecast: &'static str,
    pub label_model_fit: &'static str,
    pub label_boundary: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Stock Price Prediction",
    app_subtitle: "Predict tomorrow's closing price with the Attention-Based CNN-LSTM model",

    intake_heading: "Data File",
    intake_drop_hint: "Drag and drop a CSV file here",
    intake_drop_active: "Drop the CSV file here...",
    intake_columns_hint: "CSV must contain: date, close, open, high, low, volume",
    intake_path_hint: "or type a path to a .csv file",
    intake_open_button: "📂 Open",
    intake_remove_button: "✖ Remove file",
    intake_rejected_title: "Invalid file",

    predict_heading: "Next Day Prediction",
    predict_explainer_prefix: "The model predicts the next day's closing price from the last ",
    predict_explainer_suffix: " days of historical data in your file.",
    predict_button: "📈 Predict Next Day",
    predict_button_busy: "Predicting...",
    upload_button: "⬆ Upload only",
    upload_pending: "Uploading...",

    model_heading: "Model",
    model_refresh_button: "⟳ Refresh",
    model_loading: "Loading model information...",

    layers_heading: "Chart Layers",

    guide_heading: "Quick Start Guide",
    guide_steps: [
        "Upload your CSV file with historical stock data",
        "Required columns: date, close, open, high, low, volume",
        "Click \"Predict Next Day\" to get tomorrow's forecast",
    ],

    error_heading: "Prediction Error",
    loading_heading: "Analyzing Your Data...",
    loading_detail: "The model is processing the historical data and generating predictions",
    empty_heading: "Ready to Predict",
    empty_detail: "Upload your CSV file and click predict to see the forecast",
    headline_label: "Next Day Prediction",
    headline_predicted_label: "Predicted Close Price",
    headline_last_label: "Last Known Price",
    headline_change_label: "Expected Change",

    stat_records_title: "Input Records",
    stat_records_detail: "Historical data points analyzed",
    stat_horizon_title: "Prediction Horizon",
    stat_horizon_detail: "Next trading day forecast",
    stat_steps_title: "Time Steps Used",
    stat_steps_detail: "Days of historical context",

    plot_title: "Stock Price Prediction - Time Series",
    plot_x_axis: "Date",
    plot_y_axis: "Close Price (USD)",
    label_actual: "Actual Data",
    label_forecast: "Future Predictions",
    label_model_fit: "Model Fit",
    label_boundary: "Last Known Price",
};
