use annotator_core::decode::{decode_wav, mix_planar, prefer_decode_error, DecodeError};
use annotator_core::DecodedAudio;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioBuffer, AudioContext, File};

/// Read the whole file into memory.
pub async fn read_file_bytes(file: &File) -> Result<Vec<u8>, DecodeError> {
    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| DecodeError::Read(format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Decode with the browser's `AudioContext`, averaging channels to mono.
async fn decode_with_platform(bytes: &[u8]) -> Result<DecodedAudio, DecodeError> {
    let ctx = AudioContext::new().map_err(|e| DecodeError::Decode(format!("{e:?}")))?;

    // decodeAudioData detaches the buffer it is given, so hand it a copy
    let array = js_sys::Uint8Array::from(bytes);
    let promise = ctx
        .decode_audio_data(&array.buffer())
        .map_err(|e| DecodeError::Decode(format!("{e:?}")))?;
    let result = JsFuture::from(promise).await;
    if let Ok(closing) = ctx.close() {
        let _ = JsFuture::from(closing).await;
    }

    let buffer: AudioBuffer = result
        .map_err(|e| DecodeError::Decode(format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| DecodeError::Decode("decoder did not return an AudioBuffer".into()))?;

    let channels = buffer.number_of_channels();
    let planar = (0..channels)
        .map(|c| buffer.get_channel_data(c))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DecodeError::Decode(format!("{e:?}")))?;

    let samples = mix_planar(&planar);
    if samples.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(DecodedAudio::new(samples, buffer.sample_rate() as u32, channels))
}

/// Decode an uploaded file. The platform decoder goes first; WAV files it
/// rejects get a second chance with the built-in WAV reader.
pub async fn decode_file(file: &File) -> Result<DecodedAudio, DecodeError> {
    let bytes = read_file_bytes(file).await?;
    match decode_with_platform(&bytes).await {
        Ok(audio) => Ok(audio),
        Err(e) => {
            log::warn!("Platform decoder failed ({e}); trying WAV reader");
            decode_wav(&bytes).map_err(|wav_err| {
                log::warn!("WAV reader failed too: {wav_err}");
                prefer_decode_error(e, wav_err)
            })
        }
    }
}
