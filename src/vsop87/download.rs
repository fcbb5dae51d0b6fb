//! Location and download of the IMCCE VSOP87A files.
//!
//! A user-provided path always wins. Otherwise, with the `vsop-download` feature, the file is
//! fetched once from the IMCCE server into the user cache directory
//! (`<cache>/geovsop_cache/vsop87/VSOP87A.<ext>`) and reused afterwards.

use camino::{Utf8Path, Utf8PathBuf};

use crate::{ephemeris::planets::Planet, geovsop_errors::GeoVsopError};

/// Base URL of the VSOP87 distribution.
pub const VSOP87_BASE_URL: &str = "https://ftp.imcce.fr/pub/ephem/planets/vsop87";

/// File name of the VSOP87A series of `planet`, e.g. `VSOP87A.ear`.
pub fn vsop87a_file_name(planet: Planet) -> String {
    format!("VSOP87A.{}", planet.file_extension())
}

/// Download a large file from a URL
/// Uses reqwest to download the file in chunks
/// and saves it to the specified path using tokio's async file I/O
/// and stream processing.
///
/// Arguments
/// ---------
/// * `url`: the URL of the file to download
/// * `path`: the path to save the downloaded file
///
/// Return
/// ------
/// * An error if the download fails
/// * Ok(()) if the download is successful
#[cfg(feature = "vsop-download")]
async fn download_big_file(url: &str, path: &Utf8Path) -> Result<(), GeoVsopError> {
    use tokio::{fs::File, io::AsyncWriteExt};
    use tokio_stream::StreamExt;

    let response = reqwest::get(url).await?.error_for_status()?;
    let mut file = File::create(path).await?;
    log::info!("Downloading {url}...");

    let mut stream = response.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;

    log::info!("Downloaded {url} into {path}");
    Ok(())
}

/// Get the VSOP87A file of a planet
///
/// Arguments
/// ---------
/// * `planet`: the body whose series are requested
/// * `user_path`: an optional user-provided path to the file
///
/// Return
/// ------
/// * The path to the VSOP87A file
/// * [`GeoVsopError::VsopFileNotFound`] if the user path does not exist, or if no path is given
///   and the `vsop-download` feature is disabled
pub fn get_vsop87_file(
    planet: Planet,
    user_path: Option<&str>,
) -> Result<Utf8PathBuf, GeoVsopError> {
    if let Some(path_str) = user_path {
        let path = Utf8Path::new(path_str);
        return if path.exists() {
            Ok(path.to_path_buf())
        } else {
            Err(GeoVsopError::VsopFileNotFound(path_str.to_string()))
        };
    }

    #[cfg(feature = "vsop-download")]
    {
        use directories::BaseDirs;
        use std::fs;

        let base_dir = BaseDirs::new().ok_or_else(|| {
            GeoVsopError::UnableToCreateBaseDir("cannot find the user cache directory".into())
        })?;
        let cache_path = Utf8Path::from_path(base_dir.cache_dir()).ok_or_else(|| {
            GeoVsopError::UnableToCreateBaseDir(format!(
                "non UTF-8 cache path: {}",
                base_dir.cache_dir().display()
            ))
        })?;
        let cache_path = cache_path.join("geovsop_cache").join("vsop87");
        fs::create_dir_all(&cache_path)?;

        let filename = vsop87a_file_name(planet);
        let local_file = cache_path.join(&filename);

        if local_file.exists() {
            log::debug!("Reusing cached {local_file}");
            return Ok(local_file);
        }

        let url = format!("{VSOP87_BASE_URL}/{filename}");

        let rt = tokio::runtime::Runtime::new()?;
        if let Err(err) = rt.block_on(download_big_file(&url, &local_file)) {
            log::warn!("Download of {url} failed: {err}");
            // A partial file would be picked up as a valid cache entry
            let _ = fs::remove_file(&local_file);
            return Err(err);
        }

        Ok(local_file)
    }

    #[cfg(not(feature = "vsop-download"))]
    {
        Err(GeoVsopError::VsopFileNotFound(format!(
            "{} (no path given and the vsop-download feature is disabled)",
            vsop87a_file_name(planet)
        )))
    }
}
