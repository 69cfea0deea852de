//! Devices command implementation

use anyhow::Result;

use otkhi_engine::default_lanes;

/// Execute the devices command
pub fn execute() -> Result<()> {
    println!("cpu: {} default lane(s)", default_lanes());

    #[cfg(feature = "opencl")]
    {
        let devices = otkhi_engine::probe_devices();
        if devices.is_empty() {
            println!("opencl: no platform or device found");
        }
        for device in devices {
            println!(
                "opencl: {} ({}, {}, {} MiB)",
                device.name,
                device.vendor,
                if device.is_gpu { "gpu" } else { "cpu" },
                device.global_mem_size / (1024 * 1024)
            );
        }
    }
    #[cfg(not(feature = "opencl"))]
    println!("opencl: not compiled in (enable the 'opencl' feature)");

    #[cfg(feature = "cuda")]
    println!("cuda: gateway linked");
    #[cfg(not(feature = "cuda"))]
    println!("cuda: not compiled in (enable the 'cuda' feature)");

    Ok(())
}
