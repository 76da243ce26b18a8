/// Long-lived webview script that owns the platform speech objects.
///
/// Receives `SpeechCommand` JSON through `dioxus.recv()` and posts
/// `BridgeEvent` JSON through `dioxus.send()`.
pub(super) const BRIDGE_SCRIPT: &str = r#"
const synth = window.speechSynthesis || null;
const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition || null;
let recognition = null;
let listenId = 0;

if (Recognition) {
    recognition = new Recognition();
    recognition.continuous = false;
    recognition.interimResults = false;
    recognition.onresult = (event) => {
        const id = listenId;
        try {
            const transcript = event.results[0][0].transcript;
            dioxus.send({ type: "recognition_result", id, transcript: String(transcript) });
        } catch (err) {
            dioxus.send({ type: "malformed", id, message: String(err) });
        }
    };
    recognition.onerror = (event) => {
        dioxus.send({ type: "recognition_error", id: listenId, message: String(event.error || "unknown") });
    };
    recognition.onend = () => {
        const id = listenId;
        listenId = 0;
        dioxus.send({ type: "recognition_end", id });
    };
}

dioxus.send({ type: "ready", synthesis: !!synth, recognition: !!recognition });

while (true) {
    const command = await dioxus.recv();
    switch (command.type) {
        case "speak": {
            const id = command.id;
            if (!synth) {
                dioxus.send({ type: "speech_error", id, message: "unsupported" });
                break;
            }
            synth.cancel();
            const utterance = new SpeechSynthesisUtterance(command.text);
            utterance.rate = command.rate;
            utterance.pitch = command.pitch;
            utterance.volume = command.volume;
            utterance.onstart = () => dioxus.send({ type: "speech_start", id });
            utterance.onend = () => dioxus.send({ type: "speech_end", id });
            utterance.onerror = (event) => {
                dioxus.send({ type: "speech_error", id, message: String(event.error || "unknown") });
            };
            synth.speak(utterance);
            break;
        }
        case "cancel_speech":
            if (synth) synth.cancel();
            break;
        case "listen": {
            const id = command.id;
            if (!recognition) {
                dioxus.send({ type: "recognition_error", id, message: "unsupported" });
                dioxus.send({ type: "recognition_end", id });
                break;
            }
            listenId = id;
            recognition.lang = command.lang;
            try {
                recognition.start();
            } catch (err) {
                listenId = 0;
                dioxus.send({ type: "recognition_error", id, message: String(err) });
                dioxus.send({ type: "recognition_end", id });
            }
            break;
        }
        case "stop_listening":
            if (recognition) recognition.stop();
            break;
    }
}
"#;
