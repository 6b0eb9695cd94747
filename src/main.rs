fn main() {
    voice_trigger::run();
}
