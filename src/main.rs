//! tts-smoke CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tts_smoke::backend::{Backend, create_backend};
use tts_smoke::cli::Args;
use tts_smoke::driver::SmokeTest;
use tts_smoke::engine::TtsEngine;

fn main() -> Result<()> {
    let args = Args::parse();

    let backend =
        create_backend(&args.base_url).context("Failed to initialize the TTS service client")?;
    let engine = TtsEngine::with_chunk_chars(backend, args.chunk_chars);

    if args.list_voices {
        return list_voices(&engine);
    }

    if args.verbose {
        println!("Synthesizing {} characters", args.text.chars().count());
        println!("  Service: {}", args.base_url);
        if let Some(ref voice) = args.voice {
            println!("  Voice: {voice}");
        }
        println!("  Output: {}", args.output.display());
    }

    let mut smoke = SmokeTest::new().with_text(args.text).with_output(args.output);
    if let Some(voice) = args.voice {
        smoke = smoke.with_voice(voice);
    }

    smoke.run(&engine).context("Failed to synthesize speech")?;

    Ok(())
}

fn list_voices<B: Backend>(engine: &TtsEngine<B>) -> Result<()> {
    let voices = engine.list_voices().context("Failed to list voices")?;

    if voices.is_empty() {
        println!("No voices found.");
        return Ok(());
    }

    println!("Available voices:");
    for voice in voices {
        println!("  {} ({})", voice.name, voice.voice_id);
        if let Some(category) = voice.category {
            println!("    Category: {category}");
        }
    }

    Ok(())
}
