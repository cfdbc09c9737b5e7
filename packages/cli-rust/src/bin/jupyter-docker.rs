//! jupyter-docker binary entry point

fn main() -> anyhow::Result<()> {
    jupyter_docker::run()
}
