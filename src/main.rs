fn main() {
    spritelst::app::cli::run();
}
