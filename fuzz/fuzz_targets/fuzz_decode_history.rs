#![no_main]

use libfuzzer_sys::fuzz_target;

use gympi_core::metrics::summarize_history;
use gympi_core::model::decode_history;
use gympi_tui::history::HistoryTable;
use gympi_tui::ChartBuilder;

fuzz_target!(|data: &[u8]| {
    let Ok(history) = decode_history(data) else {
        return;
    };

    let mut table = HistoryTable::new();
    table.render_history_table_in(&history, &chrono::Utc);
    assert_eq!(table.rows().len(), history.len());

    let mut charts = ChartBuilder::new();
    charts.render_heart_rate_chart(&history);
    charts.render_heart_rate_chart(&history);
    assert!(charts.live_instances() <= 1);

    let _ = summarize_history(&history);
});
