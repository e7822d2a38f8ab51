use crate::cmd::VersionArgs;
use crate::exit::{ExitResult, SUCCESS};

pub fn run(args: VersionArgs) -> ExitResult<i32> {
    if !args.extended {
        println!("fshost {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: fshost");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "build_target: {}",
        option_env!("FSHOST_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("frame_byte_order: little-endian");
    println!(
        "default_max_message_size: {}",
        fshost_frame::DEFAULT_MAX_PAYLOAD
    );
    println!(
        "default_max_response_size: {}",
        fshost_frame::DEFAULT_MAX_OUTBOUND
    );

    Ok(SUCCESS)
}
