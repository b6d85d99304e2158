fn main() {
    namaz_vakitleri_lib::run()
}
