use env_logger::Env;
use huffzw::{compress, decompress, CompressionType};
use std::env;
use std::process;

/// Compresses or decompresses one file and prints the result record.
///
/// Usage: cargo run --example main <compress|decompress> <input> <output> [huffman|lzw|auto]
fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <compress|decompress> <input_file> <output_file> [algorithm]",
            args[0]
        );
        eprintln!("Algorithms: huffman, lzw, auto (default)");
        process::exit(1);
    }

    let (operation, input, output) = (&args[1], &args[2], &args[3]);
    let result = match operation.as_str() {
        "compress" => {
            let kind = match args.get(4).map(|s| s.parse::<CompressionType>()) {
                None => CompressionType::Auto,
                Some(Ok(kind)) => kind,
                Some(Err(err)) => {
                    eprintln!("{err}");
                    process::exit(1);
                }
            };
            compress(input, output, kind)
        }
        "decompress" => decompress(input, output),
        _ => {
            eprintln!("Unknown operation \"{operation}\". Use 'compress' or 'decompress'");
            process::exit(1);
        }
    };

    println!("success:          {}", result.success);
    println!("original size:    {}", result.original_size);
    println!("compressed size:  {}", result.compressed_size);
    println!("compression ratio: {:.2}%", result.compression_ratio);
    println!("algorithm:        {}", result.algorithm);
    if let Some(error) = &result.error {
        println!("error:            {error}");
    }

    if !result.success {
        process::exit(1);
    }
}
