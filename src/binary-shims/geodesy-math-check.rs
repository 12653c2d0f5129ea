fn main() {
    geodesy_tasks::entry_points::geodesy_math_check();
}
