use std::path::Path;

use clap::Parser;
use pajek_clu::io::{read_clu_as_partition, write_partition_to_clu_file};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the .clu file
    clu_filepath: String,

    /// Print the size of every community
    #[arg(short, long, default_value_t = false)]
    sizes: bool,

    /// Filename where a canonical CRLF copy of the partition should be written
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let partition = read_clu_as_partition(Path::new(&args.clu_filepath))?;
    println!("Vertices {:?}", partition.vertex_count());
    println!("Communities {:?}", partition.community_count());
    if args.sizes {
        for (community_id, community) in partition.communities().iter().enumerate() {
            println!("Community {} has {} vertices", community_id + 1, community.len());
        }
    }
    if let Some(output) = args.output {
        write_partition_to_clu_file(&partition, &output)?;
    }
    Ok(())
}
