use crate::huffman::{CodeTable, FrequencyTable};

#[ctor::ctor]
fn init() {
    if let Err(error) = log4rs::init_file("log4rs.yaml", Default::default()) {
        eprintln!("Logging disabled, unable to load log4rs.yaml: {}", error);
    }
}

pub fn log_code_table(frequencies: &FrequencyTable, codes: &CodeTable) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let lines: Vec<String> = codes
        .iter()
        .map(|(symbol, code)| {
            format!(
                "{:?} x{} -> {}",
                symbol,
                frequencies.frequency(symbol).unwrap_or_default(),
                code
            )
        })
        .collect();
    log::debug!("Code table ({} symbols)\n{}", codes.len(), lines.join("\n"));
}
