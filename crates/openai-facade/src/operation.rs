//! The fixed (resource, action) registry.
//!
//! Each façade method names exactly one [`Operation`]. The table is built at
//! compile time; there is no runtime routing.

use core::fmt;

use crate::envelope::CallShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Resource {
    Completions,
    Embeddings,
    Files,
    Images,
    #[strum(serialize = "audio.transcriptions")]
    AudioTranscriptions,
    #[strum(serialize = "audio.translations")]
    AudioTranslations,
    #[strum(serialize = "audio.speech")]
    AudioSpeech,
    Moderations,
    Models,
    #[strum(serialize = "fine_tuning.jobs")]
    FineTuningJobs,
    #[strum(serialize = "fine_tuning.jobs.checkpoints")]
    FineTuningJobCheckpoints,
    Batches,
    Uploads,
    #[strum(serialize = "uploads.parts")]
    UploadParts,
    #[strum(serialize = "beta.assistants")]
    Assistants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Create,
    Retrieve,
    Update,
    List,
    Delete,
    Cancel,
    Complete,
    Content,
    WaitForProcessing,
    Generate,
    CreateVariation,
    Edit,
    ListEvents,
}

/// One remote operation and the call shape its façade method accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    pub resource: Resource,
    pub action: Action,
    pub shape: CallShape,
}

impl Operation {
    pub const fn new(resource: Resource, action: Action, shape: CallShape) -> Self {
        Self {
            resource,
            action,
            shape,
        }
    }

    pub const COMPLETIONS_CREATE: Self = Self::new(Resource::Completions, Action::Create, CallShape::Body);

    pub const EMBEDDINGS_CREATE: Self = Self::new(Resource::Embeddings, Action::Create, CallShape::Body);

    pub const FILES_CREATE: Self = Self::new(Resource::Files, Action::Create, CallShape::Body);
    pub const FILES_RETRIEVE: Self = Self::new(Resource::Files, Action::Retrieve, CallShape::Identifier);
    pub const FILES_LIST: Self = Self::new(Resource::Files, Action::List, CallShape::Query);
    pub const FILES_DELETE: Self = Self::new(Resource::Files, Action::Delete, CallShape::Identifier);
    pub const FILES_CONTENT: Self = Self::new(Resource::Files, Action::Content, CallShape::Identifier);
    pub const FILES_WAIT_FOR_PROCESSING: Self =
        Self::new(Resource::Files, Action::WaitForProcessing, CallShape::Identifier);

    pub const IMAGES_GENERATE: Self = Self::new(Resource::Images, Action::Generate, CallShape::Body);
    pub const IMAGES_CREATE_VARIATION: Self =
        Self::new(Resource::Images, Action::CreateVariation, CallShape::Body);
    pub const IMAGES_EDIT: Self = Self::new(Resource::Images, Action::Edit, CallShape::Body);

    pub const AUDIO_TRANSCRIPTIONS_CREATE: Self =
        Self::new(Resource::AudioTranscriptions, Action::Create, CallShape::Body);
    pub const AUDIO_TRANSLATIONS_CREATE: Self =
        Self::new(Resource::AudioTranslations, Action::Create, CallShape::Body);
    pub const AUDIO_SPEECH_CREATE: Self = Self::new(Resource::AudioSpeech, Action::Create, CallShape::Body);

    pub const MODERATIONS_CREATE: Self = Self::new(Resource::Moderations, Action::Create, CallShape::Body);

    pub const MODELS_RETRIEVE: Self = Self::new(Resource::Models, Action::Retrieve, CallShape::Identifier);
    pub const MODELS_LIST: Self = Self::new(Resource::Models, Action::List, CallShape::Query);
    pub const MODELS_DELETE: Self = Self::new(Resource::Models, Action::Delete, CallShape::Identifier);

    pub const FINE_TUNING_JOBS_CREATE: Self =
        Self::new(Resource::FineTuningJobs, Action::Create, CallShape::Body);
    pub const FINE_TUNING_JOBS_RETRIEVE: Self =
        Self::new(Resource::FineTuningJobs, Action::Retrieve, CallShape::Identifier);
    pub const FINE_TUNING_JOBS_LIST: Self = Self::new(Resource::FineTuningJobs, Action::List, CallShape::Query);
    pub const FINE_TUNING_JOBS_CANCEL: Self =
        Self::new(Resource::FineTuningJobs, Action::Cancel, CallShape::Identifier);
    pub const FINE_TUNING_JOBS_LIST_EVENTS: Self =
        Self::new(Resource::FineTuningJobs, Action::ListEvents, CallShape::Query);
    pub const FINE_TUNING_JOB_CHECKPOINTS_LIST: Self =
        Self::new(Resource::FineTuningJobCheckpoints, Action::List, CallShape::Query);

    pub const BATCHES_CREATE: Self = Self::new(Resource::Batches, Action::Create, CallShape::Body);
    pub const BATCHES_RETRIEVE: Self = Self::new(Resource::Batches, Action::Retrieve, CallShape::Identifier);
    pub const BATCHES_LIST: Self = Self::new(Resource::Batches, Action::List, CallShape::Query);
    pub const BATCHES_CANCEL: Self = Self::new(Resource::Batches, Action::Cancel, CallShape::Identifier);

    pub const UPLOADS_CREATE: Self = Self::new(Resource::Uploads, Action::Create, CallShape::Body);
    pub const UPLOADS_CANCEL: Self = Self::new(Resource::Uploads, Action::Cancel, CallShape::Identifier);
    pub const UPLOADS_COMPLETE: Self = Self::new(Resource::Uploads, Action::Complete, CallShape::Body);
    pub const UPLOAD_PARTS_CREATE: Self = Self::new(Resource::UploadParts, Action::Create, CallShape::Body);

    pub const ASSISTANTS_CREATE: Self = Self::new(Resource::Assistants, Action::Create, CallShape::Body);
    pub const ASSISTANTS_RETRIEVE: Self =
        Self::new(Resource::Assistants, Action::Retrieve, CallShape::Identifier);
    pub const ASSISTANTS_UPDATE: Self = Self::new(Resource::Assistants, Action::Update, CallShape::Body);
    pub const ASSISTANTS_LIST: Self = Self::new(Resource::Assistants, Action::List, CallShape::Query);
    pub const ASSISTANTS_DELETE: Self =
        Self::new(Resource::Assistants, Action::Delete, CallShape::Identifier);

    /// Every remote operation the façade exposes.
    pub const ALL: [Self; 37] = [
        Self::COMPLETIONS_CREATE,
        Self::EMBEDDINGS_CREATE,
        Self::FILES_CREATE,
        Self::FILES_RETRIEVE,
        Self::FILES_LIST,
        Self::FILES_DELETE,
        Self::FILES_CONTENT,
        Self::FILES_WAIT_FOR_PROCESSING,
        Self::IMAGES_GENERATE,
        Self::IMAGES_CREATE_VARIATION,
        Self::IMAGES_EDIT,
        Self::AUDIO_TRANSCRIPTIONS_CREATE,
        Self::AUDIO_TRANSLATIONS_CREATE,
        Self::AUDIO_SPEECH_CREATE,
        Self::MODERATIONS_CREATE,
        Self::MODELS_RETRIEVE,
        Self::MODELS_LIST,
        Self::MODELS_DELETE,
        Self::FINE_TUNING_JOBS_CREATE,
        Self::FINE_TUNING_JOBS_RETRIEVE,
        Self::FINE_TUNING_JOBS_LIST,
        Self::FINE_TUNING_JOBS_CANCEL,
        Self::FINE_TUNING_JOBS_LIST_EVENTS,
        Self::FINE_TUNING_JOB_CHECKPOINTS_LIST,
        Self::BATCHES_CREATE,
        Self::BATCHES_RETRIEVE,
        Self::BATCHES_LIST,
        Self::BATCHES_CANCEL,
        Self::UPLOADS_CREATE,
        Self::UPLOADS_CANCEL,
        Self::UPLOADS_COMPLETE,
        Self::UPLOAD_PARTS_CREATE,
        Self::ASSISTANTS_CREATE,
        Self::ASSISTANTS_RETRIEVE,
        Self::ASSISTANTS_UPDATE,
        Self::ASSISTANTS_LIST,
        Self::ASSISTANTS_DELETE,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.action)
    }
}
