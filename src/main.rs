use sedi::problem::Problem;
use sedi::settings::{self};

fn main() {
    let settings = settings::load_config().unwrap();
    let mut problem = Problem::new(Some(settings));

    problem.solve();
    problem.writeup();
}
