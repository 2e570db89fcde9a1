fn main() {
    organelle_editor::run();
}
