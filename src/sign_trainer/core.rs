use crate::classifier::Prediction;
use crate::device_camera::interface::DeviceCameraEvent;
use crate::example_store::{ClassId, Embedding, StoreError};
use crate::feature_extractor::interface::FeatureExtractorEvent;
use image::DynamicImage;

type DeviceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Default)]
pub struct Model {
    pub devices: DeviceStates,
    pub run: RunState,
    pub pending_capture: Option<ClassId>,
    pub last_prediction: Option<Prediction>,
}

#[derive(Debug, Clone, Default)]
pub struct DeviceStates {
    pub camera: CameraState,
    pub extractor: ExtractorState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CameraState {
    #[default]
    Disconnected,
    Connected,
    Started,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtractorState {
    #[default]
    Disconnected,
    Connected,
    Loaded,
}

/// One full iteration walks Capturing → Embedding → (Recording | Classifying)
/// → Idle; Idle waits out the pacing delay before the next capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Initializing,
    Capturing,
    Embedding,
    Recording {
        class_id: ClassId,
    },
    Classifying,
    Idle,
    Stopped,
}

#[derive(Debug)]
pub enum Event {
    CameraEvent(DeviceCameraEvent),
    CameraStartDone(Result<(), DeviceError>),
    ExtractorEvent(FeatureExtractorEvent),
    ExtractorLoadDone(Result<(), DeviceError>),
    FrameCaptureDone(Result<DynamicImage, DeviceError>),
    FrameEmbedDone(Result<Embedding, DeviceError>),
    ExampleRecordDone(Result<usize, StoreError>),
    ClassifyDone(Result<Option<Prediction>, StoreError>),
    DelayDone,
    TrainExampleRequested(ClassId),
    StopRequested,
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::FrameCaptureDone(Ok(_)) => "FrameCaptureDone(Ok(frame))".to_string(),
            Event::FrameEmbedDone(Ok(embedding)) => {
                format!("FrameEmbedDone(Ok([f32; {}]))", embedding.len())
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Effect {
    SubscribeToCameraEvents,
    SubscribeToExtractorEvents,
    StartCamera,
    LoadExtractor,
    CaptureFrame,
    EmbedFrame {
        frame: DynamicImage,
    },
    RecordExample {
        class_id: ClassId,
        embedding: Embedding,
    },
    ClassifyEmbedding {
        embedding: Embedding,
    },
    Delay,
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::EmbedFrame { .. } => "EmbedFrame { frame }".to_string(),
            Effect::RecordExample {
                class_id,
                embedding,
            } => format!(
                "RecordExample {{ class_id: {}, embedding: [f32; {}] }}",
                class_id,
                embedding.len()
            ),
            Effect::ClassifyEmbedding { embedding } => {
                format!("ClassifyEmbedding {{ embedding: [f32; {}] }}", embedding.len())
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::default(),
        vec![
            Effect::SubscribeToCameraEvents,
            Effect::SubscribeToExtractorEvents,
        ],
    )
}

pub fn transition(mut model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model.run.clone(), event) {
        // Stop wins from any state. In-flight results arriving afterwards
        // are dropped below, so a cancelled iteration never touches the
        // store.
        (_, Event::StopRequested) => {
            model.run = RunState::Stopped;
            model.pending_capture = None;
            (model, vec![])
        }
        (RunState::Stopped, _) => (model, vec![]),

        // A training capture is remembered and consumed by the next
        // embedded frame.
        (_, Event::TrainExampleRequested(class_id)) => {
            model.pending_capture = Some(class_id);
            (model, vec![])
        }

        // Losing a device re-enters the ready gate.
        (_, Event::CameraEvent(DeviceCameraEvent::Disconnected)) => {
            model.devices.camera = CameraState::Disconnected;
            model.run = RunState::Initializing;
            (model, vec![])
        }
        (_, Event::ExtractorEvent(FeatureExtractorEvent::Disconnected)) => {
            model.devices.extractor = ExtractorState::Disconnected;
            model.run = RunState::Initializing;
            (model, vec![])
        }

        // Device ready gate
        (RunState::Initializing, Event::CameraEvent(DeviceCameraEvent::Connected)) => {
            model.devices.camera = CameraState::Connected;
            (model, vec![Effect::StartCamera])
        }
        (RunState::Initializing, Event::CameraStartDone(Ok(()))) => {
            model.devices.camera = CameraState::Started;
            if model.devices.extractor == ExtractorState::Loaded {
                model.run = RunState::Capturing;
                (model, vec![Effect::CaptureFrame])
            } else {
                (model, vec![])
            }
        }
        (RunState::Initializing, Event::ExtractorEvent(FeatureExtractorEvent::Connected)) => {
            model.devices.extractor = ExtractorState::Connected;
            (model, vec![Effect::LoadExtractor])
        }
        (RunState::Initializing, Event::ExtractorLoadDone(Ok(()))) => {
            model.devices.extractor = ExtractorState::Loaded;
            if model.devices.camera == CameraState::Started {
                model.run = RunState::Capturing;
                (model, vec![Effect::CaptureFrame])
            } else {
                (model, vec![])
            }
        }

        // Main loop
        (RunState::Capturing, Event::FrameCaptureDone(Ok(frame))) => {
            model.run = RunState::Embedding;
            (model, vec![Effect::EmbedFrame { frame }])
        }
        (RunState::Capturing, Event::FrameCaptureDone(Err(_))) => {
            model.run = RunState::Idle;
            (model, vec![Effect::Delay])
        }
        (RunState::Embedding, Event::FrameEmbedDone(Ok(embedding))) => {
            match model.pending_capture.take() {
                Some(class_id) => {
                    model.run = RunState::Recording { class_id };
                    (
                        model,
                        vec![Effect::RecordExample {
                            class_id,
                            embedding,
                        }],
                    )
                }
                None => {
                    model.run = RunState::Classifying;
                    (model, vec![Effect::ClassifyEmbedding { embedding }])
                }
            }
        }
        (RunState::Embedding, Event::FrameEmbedDone(Err(_))) => {
            model.run = RunState::Idle;
            (model, vec![Effect::Delay])
        }
        (RunState::Recording { .. }, Event::ExampleRecordDone(_)) => {
            model.run = RunState::Idle;
            (model, vec![Effect::Delay])
        }
        (RunState::Classifying, Event::ClassifyDone(Ok(prediction))) => {
            if let Some(prediction) = prediction {
                model.last_prediction = Some(prediction);
            }
            model.run = RunState::Idle;
            (model, vec![Effect::Delay])
        }
        (RunState::Classifying, Event::ClassifyDone(Err(_))) => {
            model.run = RunState::Idle;
            (model, vec![Effect::Delay])
        }
        (RunState::Idle, Event::DelayDone) => {
            model.run = RunState::Capturing;
            (model, vec![Effect::CaptureFrame])
        }

        // Default case
        _ => (model, vec![]),
    }
}
