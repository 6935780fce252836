//! LU and PLU decompositions of a few classic matrices
//!
//! Prints the factors of the 3×3 textbook matrix and of a Hilbert matrix,
//! first with the unpivoted LU, then with partial pivoting.
//!
//! Run with:
//!   RUST_LOG=info cargo run -p math-audio-direct --example factor_demo [hilbert_size]

use math_audio_direct::testdata::{hilbert_matrix, textbook_matrix};
use math_audio_direct::{
    DirectError, Permutation, PluConfig, format_matrix, lu_factor, plu_factor, unpack,
};
use ndarray::Array2;

fn print_lu(name: &str, a: &Array2<f64>) -> Result<(), DirectError> {
    let mut packed = a.clone();
    lu_factor(&mut packed)?;
    let (l, u) = unpack(&packed)?;

    println!("=== LU: {} ===", name);
    println!("L matrix:\n{}", format_matrix(&l));
    println!("U matrix:\n{}", format_matrix(&u));
    Ok(())
}

fn print_plu(name: &str, a: &Array2<f64>, config: &PluConfig<f64>) -> Result<(), DirectError> {
    let mut packed = a.clone();
    let mut perm = Permutation::identity(a.nrows());

    println!("=== PLU: {} ===", name);
    match plu_factor(&mut packed, &mut perm, config) {
        Ok(()) => {
            let (l, u) = unpack(&packed)?;
            println!("Permutation: {:?}\n", perm.as_slice());
            println!("L matrix:\n{}", format_matrix(&l));
            println!("U matrix:\n{}", format_matrix(&u));
        }
        Err(DirectError::SingularMatrix { step, pivot }) => {
            println!(
                "Matrix is singular: pivot {:e} at step {} (permutation so far {:?})\n",
                pivot,
                step,
                perm.as_slice()
            );
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Hilbert size from the command line; missing, invalid or zero falls back to 20
fn parse_size(arg: Option<String>) -> usize {
    arg.and_then(|s| s.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(20)
}

fn main() -> Result<(), DirectError> {
    env_logger::init();

    let hilbert_size = parse_size(std::env::args().nth(1));

    let config = PluConfig {
        print_interval: 5,
        ..PluConfig::default()
    };

    let a = textbook_matrix();
    println!("A matrix:\n{}", format_matrix(&a));
    print_lu("3x3", &a)?;
    print_plu("3x3", &a, &config)?;

    let h = hilbert_matrix(hilbert_size);
    let name = format!("{0}x{0} Hilbert", hilbert_size);
    print_lu(&name, &h)?;
    print_plu(&name, &h, &config)?;

    Ok(())
}
