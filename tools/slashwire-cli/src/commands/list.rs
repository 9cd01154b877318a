use anyhow::Result;
use clap::Args;
use slashwire::schema::Registry;

#[derive(Args)]
pub struct ListArgs {
    /// List enum types instead of messages
    #[arg(long)]
    enums: bool,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = Registry::service();
        if self.enums {
            for mapping in registry.enums() {
                println!("{}", mapping.full_name);
            }
        } else {
            for descriptor in registry.messages() {
                println!("{}", descriptor.full_name);
            }
        }
        Ok(())
    }
}
