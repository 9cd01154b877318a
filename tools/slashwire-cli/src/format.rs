use clap::ValueEnum;
use slashwire::WireFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum PayloadFormat {
    Binary,
    Json,
}

impl PayloadFormat {
    pub fn wire_format(self) -> WireFormat {
        match self {
            PayloadFormat::Binary => WireFormat::Binary,
            PayloadFormat::Json => WireFormat::Json,
        }
    }
}
