/// Removes markdown bold (`**`) and italic (`*`) markers so the text reads
/// cleanly through text-to-speech. Plain substring removal; other markdown
/// is left as is.
pub fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}
