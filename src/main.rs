fn main() {
    liftoff::run();
}
