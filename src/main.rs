use log::{debug, error};

use groq_probe::{Error, ProbeConfig, RequestRunner};

async fn probe() -> Result<(), Error>
{   let config = ProbeConfig::from_env()?;
    debug!("Loaded config: {:?}", config);

    let runner = RequestRunner::new(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main()
{   env_logger::init();

    if let Err(e) = probe().await
    {   error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
