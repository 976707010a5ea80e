use std::process::exit;

use log::LevelFilter;

use sparse_hash::data::linear_algebra::error::LinearAlgebraError;
use sparse_hash::data::linear_algebra::matrix::SparseMatrix;
use sparse_hash::data::linear_algebra::vector::SparseVector;

/// Environment variable holding the log filter, for example `SPARSE_HASH_LOG=debug`.
const LOG_ENVIRONMENT_VARIABLE: &str = "SPARSE_HASH_LOG";

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENVIRONMENT_VARIABLE, "warn"))
        .init();

    if let Err(error) = run() {
        log::error!("Demonstration failed: {}", error);
        exit(1);
    }
}

fn run() -> Result<(), LinearAlgebraError> {
    println!("Sparse Vector Test:");
    let mut vector_1 = SparseVector::<f64>::new(5);
    let mut vector_2 = SparseVector::<f64>::new(5);
    *vector_1.get_mut(1)? = 2.0;
    *vector_1.get_mut(3)? = 3.5;

    *vector_2.get_mut(1)? = 1.5;
    *vector_2.get_mut(2)? = 4.0;

    println!("Vector 1:");
    print!("{}", vector_1);

    println!("Vector 2:");
    print!("{}", vector_2);

    println!("Dot Product: {}", vector_1.dot_product(&vector_2)?);

    println!();
    println!("Sparse Matrix Test:");
    let mut matrix_1 = SparseMatrix::<f64>::new(3, 3);
    let mut matrix_2 = SparseMatrix::<f64>::new(3, 3);
    *matrix_1.get_mut(0, 1)? = 2.0;
    *matrix_1.get_mut(1, 2)? = 3.5;

    *matrix_2.get_mut(0, 1)? = 1.5;
    *matrix_2.get_mut(2, 2)? = 4.0;

    println!("Matrix 1:");
    print!("{}", matrix_1);

    println!("Matrix 2:");
    print!("{}", matrix_2);

    println!("Matrix Sum:");
    print!("{}", matrix_1.checked_add(&matrix_2)?);

    println!("Matrix 1 Transposed:");
    print!("{}", matrix_1.transpose());

    Ok(())
}
