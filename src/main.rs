fn main() -> anyhow::Result<()> {
    cmake_driver::run()
}
