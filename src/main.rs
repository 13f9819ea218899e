use authorbook::run;

fn main() -> anyhow::Result<()> {
    // One statement at a time; a single thread is all the CLI needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run())
}
