use anyhow::Result;

fn main() -> Result<()> {
    ddbmap_cli::run()
}
