//! Compiled-in table of deprecated engine APIs and their replacements.

use std::collections::BTreeSet;

use serde::Serialize;

use super::version::UnityVersion;

/// One deprecated API and its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ApiMigration {
    /// As documented; may carry a parenthetical qualifier such as `(legacy)`.
    pub old_api: &'static str,
    pub new_api: &'static str,
    pub deprecated_version: &'static str,
    /// `None` while the API still ships.
    pub removed_version: Option<&'static str>,
    pub category: &'static str,
    pub notes: &'static str,
}

impl ApiMigration {
    pub fn deprecated_in(&self) -> UnityVersion {
        UnityVersion::parse(self.deprecated_version)
    }

    pub fn removed_in(&self) -> Option<UnityVersion> {
        self.removed_version.map(UnityVersion::parse)
    }
}

/// Read-only view over a migration table.
#[derive(Debug, Clone, Copy)]
pub struct MigrationRegistry {
    entries: &'static [ApiMigration],
}

impl MigrationRegistry {
    /// Registry over a custom table.
    pub const fn new(entries: &'static [ApiMigration]) -> Self {
        Self { entries }
    }

    /// Registry over the built-in table.
    pub const fn builtin() -> Self {
        Self::new(MIGRATIONS)
    }

    /// Every entry, in table order.
    pub fn all(&self) -> &'static [ApiMigration] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries deprecated at or before `target_version`.
    ///
    /// Removal is not considered: an API removed before the target is still
    /// returned.
    pub fn for_version(
        &self,
        target_version: &str,
    ) -> impl Iterator<Item = &'static ApiMigration> + '_ {
        let target = UnityVersion::parse(target_version);
        self.entries
            .iter()
            .filter(move |m| m.deprecated_in() <= target)
    }

    /// Entries whose `old_api` contains `pattern`, ignoring case.
    pub fn search_by_old_api<'p>(
        &self,
        pattern: &'p str,
    ) -> impl Iterator<Item = &'static ApiMigration> + 'p {
        let needle = pattern.to_lowercase();
        self.entries
            .iter()
            .filter(move |m| m.old_api.to_lowercase().contains(&needle))
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> BTreeSet<&'static str> {
        self.entries.iter().map(|m| m.category).collect()
    }

    /// Entries in `category`, ignoring case.
    pub fn by_category<'c>(
        &self,
        category: &'c str,
    ) -> impl Iterator<Item = &'static ApiMigration> + 'c {
        self.entries
            .iter()
            .filter(move |m| m.category.eq_ignore_ascii_case(category))
    }
}

impl Default for MigrationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Unity 2017.4 → 6000.x upgrade table.
pub static MIGRATIONS: &[ApiMigration] = &[
    ApiMigration {
        old_api: "UnityEngine.Input.GetAxis",
        new_api: "UnityEngine.InputSystem.InputAction",
        deprecated_version: "2019.4",
        removed_version: None,
        category: "Input",
        notes: "Legacy Input Manager is deprecated. Use the new Input System package.",
    },
    ApiMigration {
        old_api: "UnityEngine.Input.GetButton",
        new_api: "UnityEngine.InputSystem.InputAction",
        deprecated_version: "2019.4",
        removed_version: None,
        category: "Input",
        notes: "Legacy Input Manager is deprecated. Use the new Input System package.",
    },
    ApiMigration {
        old_api: "UnityEngine.Input.GetKey",
        new_api: "UnityEngine.InputSystem.Keyboard.current",
        deprecated_version: "2019.4",
        removed_version: None,
        category: "Input",
        notes: "Legacy Input Manager is deprecated. Use the new Input System package.",
    },
    ApiMigration {
        old_api: "UnityEngine.Input.GetMouseButton",
        new_api: "UnityEngine.InputSystem.Mouse.current",
        deprecated_version: "2019.4",
        removed_version: None,
        category: "Input",
        notes: "Legacy Input Manager is deprecated. Use the new Input System package.",
    },
    ApiMigration {
        old_api: "UnityEngine.Input.mousePosition",
        new_api: "UnityEngine.InputSystem.Mouse.current.position",
        deprecated_version: "2019.4",
        removed_version: None,
        category: "Input",
        notes: "Legacy Input Manager is deprecated. Use the new Input System package.",
    },
    ApiMigration {
        old_api: "Physics.IgnoreCollision (layer overloads)",
        new_api: "Physics.IgnoreLayerCollision",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Physics",
        notes: "Use layer-based collision matrix settings instead",
    },
    ApiMigration {
        old_api: "Physics.autoSyncTransforms",
        new_api: "Physics.simulationMode",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Physics",
        notes: "Use Physics.simulationMode for controlling physics simulation",
    },
    ApiMigration {
        old_api: "Camera.SetTargetBuffers",
        new_api: "RenderTexture.SetRenderTarget",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Rendering",
        notes: "Use RenderTexture API or Scriptable Render Pipeline",
    },
    ApiMigration {
        old_api: "RenderTexture.GetTemporary (with int parameters)",
        new_api: "RenderTexture.GetTemporary (with RenderTextureDescriptor)",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Rendering",
        notes: "Use RenderTextureDescriptor overload for clarity",
    },
    ApiMigration {
        old_api: "Graphics.Blit (obsolete overloads)",
        new_api: "CommandBuffer.Blit",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Rendering",
        notes: "Use CommandBuffer API for better control and batching",
    },
    ApiMigration {
        old_api: "OnRenderImage",
        new_api: "ScriptableRenderPass",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Rendering",
        notes: "OnRenderImage not supported in URP/HDRP. Use custom render passes.",
    },
    ApiMigration {
        old_api: "UnityEngine.UI (legacy)",
        new_api: "UnityEngine.UIElements",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "UI",
        notes: "UI Toolkit (UIElements) is the recommended UI system for editor and runtime",
    },
    ApiMigration {
        old_api: "UnityEngine.Networking.NetworkTransport",
        new_api: "Unity.Netcode.NetworkManager",
        deprecated_version: "2022.3",
        removed_version: Some("6000.0"),
        category: "Networking",
        notes: "UNet is removed in Unity 6. Use Netcode for GameObjects or third-party solution",
    },
    ApiMigration {
        old_api: "UnityEngine.Networking.NetworkManager",
        new_api: "Unity.Netcode.NetworkManager",
        deprecated_version: "2022.3",
        removed_version: Some("6000.0"),
        category: "Networking",
        notes: "UNet is removed in Unity 6. Use Netcode for GameObjects",
    },
    ApiMigration {
        old_api: "UnityEngine.Networking.NetworkBehaviour",
        new_api: "Unity.Netcode.NetworkBehaviour",
        deprecated_version: "2022.3",
        removed_version: Some("6000.0"),
        category: "Networking",
        notes: "UNet is removed in Unity 6. Use Netcode for GameObjects",
    },
    ApiMigration {
        old_api: "UnityEngine.WWW",
        new_api: "UnityEngine.Networking.UnityWebRequest",
        deprecated_version: "2018.4",
        removed_version: Some("2022.3"),
        category: "Networking",
        notes: "WWW class is removed. Use UnityWebRequest",
    },
    ApiMigration {
        old_api: "UnityEngine.Rendering.SRPBatcher (manual calls)",
        new_api: "Automatic batching",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Rendering",
        notes: "SRP Batcher is automatic in URP/HDRP; manual calls are deprecated",
    },
    ApiMigration {
        old_api: "EditorUtility.DisplayDialog (some overloads)",
        new_api: "EditorUtility.DisplayDialog (updated signature)",
        deprecated_version: "6000.0",
        removed_version: None,
        category: "Editor",
        notes: "Some dialog overloads updated in Unity 6",
    },
    ApiMigration {
        old_api: "AssetDatabase.Refresh (synchronous)",
        new_api: "AssetDatabase.RefreshSettings",
        deprecated_version: "6000.0",
        removed_version: None,
        category: "Editor",
        notes: "Consider async refresh patterns in Unity 6",
    },
    ApiMigration {
        old_api: "UnityEngine.XR.WSA",
        new_api: "UnityEngine.XR.OpenXR",
        deprecated_version: "2022.3",
        removed_version: Some("6000.0"),
        category: "XR",
        notes: "Windows Mixed Reality API deprecated. Use OpenXR",
    },
    ApiMigration {
        old_api: "UnityEngine.VR.VRSettings",
        new_api: "UnityEngine.XR.XRSettings",
        deprecated_version: "2019.4",
        removed_version: Some("2022.3"),
        category: "XR",
        notes: "Legacy VR namespace removed. Use XR namespace",
    },
    ApiMigration {
        old_api: "UnityEngine.XR.InputTracking",
        new_api: "UnityEngine.XR.InputDevices",
        deprecated_version: "2019.4",
        removed_version: None,
        category: "XR",
        notes: "InputTracking deprecated. Use InputDevices API",
    },
    ApiMigration {
        old_api: "StartCoroutine (string method name)",
        new_api: "StartCoroutine (IEnumerator)",
        deprecated_version: "2019.4",
        removed_version: None,
        category: "Coroutines",
        notes: "String-based coroutine start is slower due to reflection. Use IEnumerator overload",
    },
    ApiMigration {
        old_api: "AudioSource.PlayScheduled",
        new_api: "AudioSource.PlayScheduled (with DSP time)",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Audio",
        notes: "Ensure using DSP time for accurate audio scheduling",
    },
    ApiMigration {
        old_api: "Animation component (legacy)",
        new_api: "Animator component",
        deprecated_version: "2017.4",
        removed_version: None,
        category: "Animation",
        notes: "Legacy Animation component is deprecated. Use Animator with AnimatorController",
    },
    ApiMigration {
        old_api: "ParticleSystem.Emit (obsolete overloads)",
        new_api: "ParticleSystem.Emit (EmitParams)",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "Particles",
        notes: "Use EmitParams struct for more control over emitted particles",
    },
    ApiMigration {
        old_api: "Application.LoadLevel",
        new_api: "SceneManager.LoadScene",
        deprecated_version: "2017.4",
        removed_version: Some("2019.4"),
        category: "SceneManagement",
        notes: "Application.LoadLevel removed. Use SceneManager.LoadScene",
    },
    ApiMigration {
        old_api: "Application.LoadLevelAsync",
        new_api: "SceneManager.LoadSceneAsync",
        deprecated_version: "2017.4",
        removed_version: Some("2019.4"),
        category: "SceneManagement",
        notes: "Application.LoadLevelAsync removed. Use SceneManager.LoadSceneAsync",
    },
    ApiMigration {
        old_api: "PlayerPrefs (for complex data)",
        new_api: "JsonUtility + File IO",
        deprecated_version: "2019.4",
        removed_version: None,
        category: "Storage",
        notes: "PlayerPrefs is not suitable for complex data. Use serialization to files.",
    },
    ApiMigration {
        old_api: "GUI.* and GUILayout.*",
        new_api: "UnityEngine.UIElements",
        deprecated_version: "2022.3",
        removed_version: None,
        category: "UI",
        notes: "IMGUI is legacy. Use UI Toolkit for editor UI and runtime UI.",
    },
];
