//! Speaker reference discovery.
//!
//! Speakers are WAV files in the input folder; the backend clones the voice
//! from the selected reference. No metadata is persisted beyond the file name.

mod scanner;

pub use scanner::{Speaker, SpeakerError, list_speakers, list_text_files};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_wav(path: &Path, sample_rate: u32, samples: u32) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..samples {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    // ===========================================
    // list_speakers tests
    // ===========================================

    #[test]
    fn test_list_speakers_empty_dir() {
        let temp_dir = TempDir::new().unwrap();

        let speakers = list_speakers(temp_dir.path()).unwrap();

        assert!(speakers.is_empty());
    }

    #[test]
    fn test_list_speakers_excludes_non_wav_files() {
        let temp_dir = TempDir::new().unwrap();
        write_wav(&temp_dir.path().join("anna.wav"), 22050, 100);
        std::fs::write(temp_dir.path().join("notes.txt"), "hello").unwrap();
        std::fs::write(temp_dir.path().join("clip.mp3"), b"ID3").unwrap();
        std::fs::write(temp_dir.path().join("wav"), b"no extension").unwrap();

        let speakers = list_speakers(temp_dir.path()).unwrap();

        assert_eq!(speakers.len(), 1);
        assert_eq!(speakers[0].name, "anna.wav");
        assert_eq!(speakers[0].path, temp_dir.path().join("anna.wav"));
    }

    #[test]
    fn test_list_speakers_only_non_wav_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("readme.md"), "# voices").unwrap();

        let speakers = list_speakers(temp_dir.path()).unwrap();

        assert!(speakers.is_empty());
    }

    #[test]
    fn test_list_speakers_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["zoe.wav", "bert.wav", "Max.WAV"] {
            write_wav(&temp_dir.path().join(name), 16000, 10);
        }

        let names: Vec<String> = list_speakers(temp_dir.path())
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["Max.WAV", "bert.wav", "zoe.wav"]);
    }

    #[test]
    fn test_list_speakers_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("folder.wav")).unwrap();

        let speakers = list_speakers(temp_dir.path()).unwrap();

        assert!(speakers.is_empty());
    }

    #[test]
    fn test_list_speakers_reads_duration() {
        let temp_dir = TempDir::new().unwrap();
        write_wav(&temp_dir.path().join("long.wav"), 8000, 16000);
        std::fs::write(temp_dir.path().join("broken.wav"), b"not a wav").unwrap();

        let speakers = list_speakers(temp_dir.path()).unwrap();

        assert_eq!(speakers.len(), 2);
        assert_eq!(speakers[0].name, "broken.wav");
        assert_eq!(speakers[0].duration, None);
        assert_eq!(speakers[1].duration, Some(2.0));
    }

    #[test]
    fn test_list_speakers_zero_sample_rate_has_no_duration() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("silent.wav");
        write_wav(&path, 16000, 10);

        let mut bytes = std::fs::read(&path).unwrap();
        bytes[24..28].copy_from_slice(&0u32.to_le_bytes());
        std::fs::write(&path, bytes).unwrap();

        let speakers = list_speakers(temp_dir.path()).unwrap();

        assert_eq!(speakers.len(), 1);
        assert_eq!(speakers[0].duration, None);
    }

    #[test]
    fn test_list_speakers_missing_dir() {
        let result = list_speakers(Path::new("/nonexistent/inputs"));

        assert!(matches!(result.unwrap_err(), SpeakerError::DirNotFound(_)));
    }

    // ===========================================
    // list_text_files tests
    // ===========================================

    #[test]
    fn test_list_text_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "Zwei.").unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "Eins.").unwrap();
        write_wav(&temp_dir.path().join("voice.wav"), 16000, 10);

        let files = list_text_files(temp_dir.path()).unwrap();

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.txt")]
        );
    }
}
