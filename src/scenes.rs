// Scene extraction - turns a generated script into ordered visual prompts.

/// Split a script into scene prompts.
///
/// A line containing a scene marker (`[SCENE`, `[HOOK`, or the word `Scene`,
/// all case-sensitive) closes the scene being accumulated and opens a new
/// one. Bracketed lines never contribute text of their own; every other
/// non-blank line is appended to the current scene. A script with no markers
/// at all still yields prompts: its words are split into three equal chunks.
///
/// Pure and deterministic, no failure mode.
pub fn extract_scenes(script: &str) -> Vec<String> {
    let mut scenes = Vec::new();
    let mut current = String::new();

    for line in script.split('\n') {
        if line.contains("[SCENE") || line.contains("[HOOK") || line.contains("Scene") {
            if !current.is_empty() {
                scenes.push(current.trim().to_string());
            }
            current.clear();
        } else if !line.trim().is_empty() && !line.contains('[') && !line.contains(']') {
            current.push_str(line);
            current.push(' ');
        }
    }

    if !current.trim().is_empty() {
        scenes.push(current.trim().to_string());
    }

    if scenes.is_empty() {
        // ceiling-divided word split, always exactly three chunks
        let words: Vec<&str> = script.split(' ').collect();
        let chunk_size = words.len().div_ceil(3);
        for i in 0..3 {
            let start = (i * chunk_size).min(words.len());
            let end = ((i + 1) * chunk_size).min(words.len());
            scenes.push(words[start..end].join(" "));
        }
    }

    scenes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::script::fallback_script;

    #[test]
    fn marked_script_splits_into_sections() {
        let script = fallback_script("Space");
        let scenes = extract_scenes(&script);

        // hook, three scenes, and the call-to-action body
        assert_eq!(scenes.len(), 5);
        assert!(scenes[0].contains("Space"));
        assert!(scenes[4].contains("Like and follow"));
    }

    #[test]
    fn bracketed_lines_never_reach_scene_text() {
        let script = fallback_script("volcanoes");
        for scene in extract_scenes(&script) {
            assert!(!scene.contains('['), "marker leaked into scene: {scene}");
            assert!(!scene.contains(']'), "marker leaked into scene: {scene}");
        }
    }

    #[test]
    fn plain_lines_accumulate_into_a_single_scene() {
        // no markers, nothing bracketed: the whole text is one scene
        let script = "a rocket\nrises slowly";
        assert_eq!(extract_scenes(script), vec!["a rocket rises slowly"]);
    }

    #[test]
    fn script_with_no_usable_lines_falls_back_to_three_chunks() {
        // the only line is bracketed, so nothing accumulates and the raw
        // words are split three ways instead
        let script = "space [view] of the blue marble [shot]";
        let scenes = extract_scenes(script);

        assert_eq!(scenes.len(), 3);
        assert!(scenes.iter().all(|s| !s.is_empty()));
        assert_eq!(scenes.join(" "), script);
    }

    #[test]
    fn chunking_preserves_the_word_sequence() {
        let script = "Scene: a b c d e f g h";
        let scenes = extract_scenes(script);
        assert_eq!(scenes.len(), 3);

        let rejoined: Vec<&str> = scenes
            .iter()
            .flat_map(|s| s.split_whitespace())
            .collect();
        let original: Vec<&str> = script.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn empty_script_still_yields_three_chunks() {
        let scenes = extract_scenes("");
        assert_eq!(scenes, vec!["", "", ""]);
    }

    #[test]
    fn a_line_mentioning_scene_counts_as_a_marker() {
        // substring match is intentional: model output often labels scenes
        // without brackets ("Scene 1: ..."), and those lines are markers too
        let script = "Scene 1: the opening\nA rocket on the pad\nScene 2: liftoff\nFlames and smoke";
        let scenes = extract_scenes(script);

        assert_eq!(scenes, vec!["A rocket on the pad", "Flames and smoke"]);
    }

    #[test]
    fn extraction_is_deterministic() {
        let script = fallback_script("deep sea creatures");
        assert_eq!(extract_scenes(&script), extract_scenes(&script));
    }
}
