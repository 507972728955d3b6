//! `struct-tags` binary entrypoint.

fn main() -> eyre::Result<()> {
    struct_tags_cli::run()
}
