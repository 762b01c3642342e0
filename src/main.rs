fn main() -> anyhow::Result<()> {
    cc_session_viewer::cli::run()
}
